//! Delegation guard
//!
//! Decides whether an assigning user may grant a role at a given scope.
//! Nobody can delegate a role more powerful than their own effective rights.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::matching::permission_matches;
use super::system::RbacEngine;
use super::types::{AccessScope, AssignmentDecision, Role, RoleAssignment};

impl RbacEngine {
    /// Check whether the assigner may grant `role_to_assign` at `target_scope`
    pub fn can_assign_role(
        &self,
        assigner_assignments: &[RoleAssignment],
        roles: &[Role],
        role_to_assign: &Role,
        target_scope: &AccessScope,
    ) -> AssignmentDecision {
        self.can_assign_role_at(
            assigner_assignments,
            roles,
            role_to_assign,
            target_scope,
            Utc::now(),
        )
    }

    /// [`can_assign_role`](Self::can_assign_role) against an explicit
    /// evaluation time
    pub fn can_assign_role_at(
        &self,
        assigner_assignments: &[RoleAssignment],
        roles: &[Role],
        role_to_assign: &Role,
        target_scope: &AccessScope,
        now: DateTime<Utc>,
    ) -> AssignmentDecision {
        let held = self.combined_effective_permissions(assigner_assignments, roles, now);

        // Administrators may grant anything
        if held.iter().any(|p| p == "*" || p == "system.admin") {
            return AssignmentDecision {
                can_assign: true,
                reason: "Assigner has administrative privileges".to_string(),
            };
        }

        // Assigning a role is a user mutation at the target scope
        let user_update = self.check_access_at(
            assigner_assignments,
            roles,
            "users.update",
            target_scope,
            now,
        );
        if !user_update.has_access {
            return AssignmentDecision {
                can_assign: false,
                reason: format!(
                    "Assigner lacks 'users.update' at {} scope",
                    target_scope.level()
                ),
            };
        }

        // Every permission the target role would grant must already be
        // covered by the assigner's own rights
        let target_permissions = self.effective_permissions(role_to_assign, roles);
        let mut uncovered: Vec<&str> = target_permissions
            .iter()
            .filter(|required| !held.iter().any(|h| permission_matches(h, required)))
            .map(String::as_str)
            .collect();
        if !uncovered.is_empty() {
            uncovered.sort_unstable();
            return AssignmentDecision {
                can_assign: false,
                reason: format!(
                    "Role '{}' grants permissions beyond the assigner's rights: {}",
                    role_to_assign.code,
                    uncovered.join(", ")
                ),
            };
        }

        AssignmentDecision {
            can_assign: true,
            reason: format!(
                "Assigner may grant role '{}' at {} scope",
                role_to_assign.code,
                target_scope.level()
            ),
        }
    }

    /// Union of effective permissions across all of a user's active
    /// assignments; expired assignments and dangling role ids are skipped
    pub fn combined_effective_permissions(
        &self,
        assignments: &[RoleAssignment],
        roles: &[Role],
        now: DateTime<Utc>,
    ) -> HashSet<String> {
        let mut combined = HashSet::new();

        for assignment in assignments {
            if let Some(expires_at) = assignment.expires_at {
                if expires_at < now {
                    continue;
                }
            }
            if let Some(role) = roles.iter().find(|r| r.id == assignment.role_id) {
                combined.extend(self.effective_permissions(role, roles));
            }
        }

        combined
    }
}
