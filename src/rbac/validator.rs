//! Role definition validation
//!
//! Validates candidate role data before creation, accumulating every
//! violation so the caller can display all problems at once.

use super::system::RbacEngine;
use super::types::{Role, RoleDraft, RoleValidation};

impl RbacEngine {
    /// Validate a candidate role against the existing role list
    pub fn validate_role(&self, draft: &RoleDraft, existing_roles: &[Role]) -> RoleValidation {
        let mut errors = Vec::new();

        if draft.name.trim().is_empty() {
            errors.push("Role name must not be empty".to_string());
        }

        if draft.code.trim().is_empty() {
            errors.push("Role code must not be empty".to_string());
        } else if existing_roles.iter().any(|r| r.code == draft.code) {
            errors.push(format!(
                "Role code '{}' duplicates an existing role",
                draft.code
            ));
        }

        if draft.permissions.is_empty() {
            errors.push("Role must grant at least one permission".to_string());
        }

        // One combined error listing every unknown code
        let mut invalid_codes: Vec<&str> = draft
            .permissions
            .iter()
            .filter(|code| !self.is_acceptable_permission(code))
            .map(String::as_str)
            .collect();
        if !invalid_codes.is_empty() {
            invalid_codes.sort_unstable();
            errors.push(format!(
                "Unknown permission codes: {}",
                invalid_codes.join(", ")
            ));
        }

        if let Some(parent_id) = &draft.parent_role_id {
            match existing_roles.iter().find(|r| &r.id == parent_id) {
                None => {
                    errors.push(format!("Parent role '{}' does not exist", parent_id));
                }
                Some(parent) if parent.scope != draft.scope => {
                    errors.push(format!(
                        "Parent role '{}' has scope {}, expected {}",
                        parent.code, parent.scope, draft.scope
                    ));
                }
                Some(_) => {}
            }
        }

        RoleValidation {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A role may carry catalog codes, wildcard forms, or `system.admin`
    fn is_acceptable_permission(&self, code: &str) -> bool {
        code == "*" || code == "system.admin" || code.ends_with('*') || self.catalog.contains(code)
    }
}
