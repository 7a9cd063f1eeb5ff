//! Access evaluation
//!
//! Pure decision logic over caller-supplied assignment and role lists.
//! Nothing here performs I/O or can fail: unknown permission codes never
//! match, dangling role references are skipped, and expired assignments are
//! ignored at check time.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::matching::permission_matches;
use super::system::RbacEngine;
use super::types::{AccessDecision, AccessScope, Role, RoleAssignment, ScopeLevel};

impl RbacEngine {
    /// Check whether any of the user's assignments grants the required
    /// permission at the requested scope
    ///
    /// Assignments are walked in the order given; the first one that passes
    /// both the permission and the scope check wins. Callers must not rely
    /// on priority among simultaneously valid roles beyond "any grant is
    /// sufficient".
    pub fn check_access(
        &self,
        assignments: &[RoleAssignment],
        roles: &[Role],
        required_permission: &str,
        scope: &AccessScope,
    ) -> AccessDecision {
        self.check_access_at(assignments, roles, required_permission, scope, Utc::now())
    }

    /// [`check_access`](Self::check_access) against an explicit evaluation
    /// time, for deterministic expiry handling
    pub fn check_access_at(
        &self,
        assignments: &[RoleAssignment],
        roles: &[Role],
        required_permission: &str,
        scope: &AccessScope,
        now: DateTime<Utc>,
    ) -> AccessDecision {
        for assignment in assignments {
            // Expired assignments are inert, not deleted
            if let Some(expires_at) = assignment.expires_at {
                if expires_at < now {
                    continue;
                }
            }

            // Dangling role reference: skip, never fatal
            let Some(role) = roles.iter().find(|r| r.id == assignment.role_id) else {
                continue;
            };

            let effective = self.effective_permissions(role, roles);
            if !effective
                .iter()
                .any(|held| permission_matches(held, required_permission))
            {
                continue;
            }

            if let Some(rationale) = scope_rationale(role.scope, assignment, scope) {
                debug!(
                    "Granted '{}' to user '{}' via role '{}'",
                    required_permission, assignment.user_id, role.code
                );
                return AccessDecision {
                    has_access: true,
                    matched_role: Some(role.clone()),
                    reason: format!("Granted by role '{}': {}", role.code, rationale),
                };
            }
        }

        AccessDecision {
            has_access: false,
            matched_role: None,
            reason: format!(
                "No active role grants '{}' at {} scope",
                required_permission,
                scope.level()
            ),
        }
    }

    /// Convenience check for a `resource.action` pair
    pub fn check_resource_permission(
        &self,
        assignments: &[RoleAssignment],
        roles: &[Role],
        resource: &str,
        action: &str,
        scope: &AccessScope,
    ) -> bool {
        let required_permission = format!("{}.{}", resource, action);
        self.check_access(assignments, roles, &required_permission, scope)
            .has_access
    }

    /// The role's own permissions plus everything inherited through its
    /// parent chain
    ///
    /// A visited set guarantees each role is expanded at most once, so the
    /// walk terminates even on malformed cyclic parent links; a dangling
    /// parent simply ends the chain.
    pub fn effective_permissions(&self, role: &Role, roles: &[Role]) -> HashSet<String> {
        let mut permissions = HashSet::new();
        let mut visited: HashSet<&str> = HashSet::new();

        let mut current = Some(role);
        while let Some(r) = current {
            if !visited.insert(r.id.as_str()) {
                break;
            }
            permissions.extend(r.permissions.iter().cloned());
            current = r
                .parent_role_id
                .as_deref()
                .and_then(|parent_id| roles.iter().find(|c| c.id == parent_id));
        }

        permissions
    }
}

/// Scope compatibility between a role's breadth, the assignment's concrete
/// org unit, and the requested scope
///
/// Returns the grant rationale when compatible, `None` otherwise.
fn scope_rationale(
    role_scope: ScopeLevel,
    assignment: &RoleAssignment,
    requested: &AccessScope,
) -> Option<String> {
    match role_scope {
        ScopeLevel::Global => Some("global role covers every scope".to_string()),
        ScopeLevel::Network => match requested {
            AccessScope::Global => None,
            AccessScope::Network { network_id } => {
                if assignment.network_id.as_deref() == Some(network_id.as_str()) {
                    Some(format!("network role assigned to network '{}'", network_id))
                } else {
                    None
                }
            }
            // Trading-point membership in the assigned network is not
            // verified; a network role reaches any trading point
            AccessScope::TradingPoint { .. } => {
                Some("network role covers trading points".to_string())
            }
        },
        ScopeLevel::TradingPoint => match requested {
            AccessScope::TradingPoint { trading_point_id } => {
                if assignment.trading_point_id.as_deref() == Some(trading_point_id.as_str()) {
                    Some(format!(
                        "role assigned to trading point '{}'",
                        trading_point_id
                    ))
                } else {
                    None
                }
            }
            AccessScope::Global | AccessScope::Network { .. } => None,
        },
    }
}
