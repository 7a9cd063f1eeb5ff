//! RBAC configuration
//!
//! The permission catalog and the seed roles are configuration data rather
//! than compiled-in globals, so one binary can serve deployments with
//! different vocabularies. Defaults cover the fuel-retail domain.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::rbac::catalog::builtin_permissions;
use crate::rbac::registry::builtin_roles;
use crate::rbac::types::{Permission, Role};
use crate::utils::error::Result;

/// RBAC configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RbacConfig {
    /// Enable RBAC enforcement
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Permission catalog for this deployment
    #[serde(default = "builtin_permissions")]
    pub permissions: Vec<Permission>,
    /// Seed roles for this deployment
    #[serde(default = "builtin_roles")]
    pub roles: Vec<Role>,
}

fn default_true() -> bool {
    true
}

impl Default for RbacConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            permissions: builtin_permissions(),
            roles: builtin_roles(),
        }
    }
}

impl RbacConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading RBAC configuration from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Merge configurations, with `other` taking precedence where it
    /// differs from the defaults
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.permissions != builtin_permissions() {
            self.permissions = other.permissions;
        }
        if other.roles != builtin_roles() {
            self.roles = other.roles;
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.permissions.is_empty() {
            return Err("Permission catalog must not be empty".to_string());
        }

        let mut permission_codes = HashSet::new();
        for permission in &self.permissions {
            if permission.code.is_empty() {
                return Err("Permission codes must not be empty".to_string());
            }
            if !permission_codes.insert(permission.code.as_str()) {
                return Err(format!("Duplicate permission code: {}", permission.code));
            }
        }

        let mut role_ids = HashSet::new();
        let mut role_codes = HashSet::new();
        for role in &self.roles {
            if !role_ids.insert(role.id.as_str()) {
                return Err(format!("Duplicate role id: {}", role.id));
            }
            if !role_codes.insert(role.code.as_str()) {
                return Err(format!("Duplicate role code: {}", role.code));
            }
        }

        // Parent links in seed data must resolve within the seed data and
        // stay on the same scope level
        for role in &self.roles {
            if let Some(parent_id) = &role.parent_role_id {
                match self.roles.iter().find(|r| &r.id == parent_id) {
                    None => {
                        return Err(format!(
                            "Role '{}' references unknown parent '{}'",
                            role.code, parent_id
                        ));
                    }
                    Some(parent) if parent.scope != role.scope => {
                        return Err(format!(
                            "Role '{}' and its parent '{}' must share a scope",
                            role.code, parent.code
                        ));
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(())
    }
}
