//! Role registry
//!
//! Data holder for the authoritative role list of a deployment. The registry
//! stores roles and enforces the system-role mutation guards; all decision
//! logic lives in the evaluator, validator, and delegation modules.

use std::collections::HashMap;

use crate::utils::error::{RbacError, Result};

use super::types::{Role, ScopeLevel};

/// Authoritative role store for a deployment
#[derive(Debug, Clone, Default)]
pub struct RoleRegistry {
    roles: HashMap<String, Role>,
}

impl RoleRegistry {
    /// Create a registry seeded with the built-in system roles
    pub fn with_system_roles() -> Self {
        Self::from_roles(builtin_roles())
    }

    /// Create a registry from role definitions, keyed by role id
    pub fn from_roles(roles: Vec<Role>) -> Self {
        let roles = roles.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self { roles }
    }

    /// Get a role by id
    pub fn get(&self, role_id: &str) -> Option<&Role> {
        self.roles.get(role_id)
    }

    /// Get a role by its code slug
    pub fn get_by_code(&self, code: &str) -> Option<&Role> {
        self.roles.values().find(|r| r.code == code)
    }

    /// List all roles
    pub fn list(&self) -> Vec<&Role> {
        self.roles.values().collect()
    }

    /// Clone the role list for passing to the evaluator
    pub fn to_vec(&self) -> Vec<Role> {
        self.roles.values().cloned().collect()
    }

    /// Number of stored roles
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Insert or replace a role
    ///
    /// Refuses to overwrite a system role.
    pub fn insert(&mut self, role: Role) -> Result<()> {
        if let Some(existing) = self.roles.get(&role.id) {
            if existing.is_system {
                return Err(RbacError::authorization("Cannot modify system roles"));
            }
        }
        self.roles.insert(role.id.clone(), role);
        Ok(())
    }

    /// Remove a role by id
    ///
    /// Refuses to remove system roles. Referential integrity against user
    /// assignments and child roles is the caller's concern.
    pub fn remove(&mut self, role_id: &str) -> Result<Role> {
        match self.roles.remove(role_id) {
            Some(role) if role.is_system => {
                self.roles.insert(role.id.clone(), role);
                Err(RbacError::authorization("Cannot delete system roles"))
            }
            Some(role) => Ok(role),
            None => Err(RbacError::authorization(format!(
                "Role '{}' not found",
                role_id
            ))),
        }
    }
}

fn system_role(
    code: &str,
    name: &str,
    description: &str,
    scope: ScopeLevel,
    permissions: &[&str],
) -> Role {
    Role {
        id: code.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        description: description.to_string(),
        scope,
        permissions: permissions.iter().map(|s| s.to_string()).collect(),
        parent_role_id: None,
        is_system: true,
    }
}

/// Built-in system roles seeded into every deployment
pub fn builtin_roles() -> Vec<Role> {
    vec![
        system_role(
            "system_admin",
            "System administrator",
            "Full access to every network and trading point",
            ScopeLevel::Global,
            &["*"],
        ),
        system_role(
            "network_admin",
            "Network administrator",
            "Manages one fuel network and its trading points",
            ScopeLevel::Network,
            &[
                "networks.read",
                "networks.update",
                "trading_points.*",
                "prices.*",
                "tanks.*",
                "connections.*",
                "workflows.*",
                "nomenclature.read",
                "users.read",
                "users.create",
                "users.update",
                "roles.read",
                "reports.read",
            ],
        ),
        system_role(
            "point_manager",
            "Trading point manager",
            "Manages day-to-day operation of one trading point",
            ScopeLevel::TradingPoint,
            &[
                "prices.read",
                "prices.update",
                "tanks.read",
                "tanks.update",
                "nomenclature.read",
                "connections.read",
                "workflows.read",
                "workflows.execute",
                "users.read",
                "reports.read",
            ],
        ),
        system_role(
            "operator",
            "Operator",
            "Runs routine operations at one trading point",
            ScopeLevel::TradingPoint,
            &[
                "prices.read",
                "tanks.read",
                "nomenclature.read",
                "workflows.execute",
            ],
        ),
        system_role(
            "viewer",
            "Viewer",
            "Read-only access to one trading point",
            ScopeLevel::TradingPoint,
            &[
                "prices.read",
                "tanks.read",
                "nomenclature.read",
                "workflows.read",
                "reports.read",
            ],
        ),
    ]
}
