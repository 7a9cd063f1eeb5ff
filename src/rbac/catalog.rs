//! Permission catalog
//!
//! Read-only lookup table keyed by permission code. The catalog is built
//! from configuration data so deployments can run different vocabularies
//! without recompilation; it is never mutated at runtime.

use std::collections::HashMap;

use super::types::{Permission, PermissionAction};

/// Read-only permission lookup keyed by code
#[derive(Debug, Clone)]
pub struct PermissionCatalog {
    permissions: HashMap<String, Permission>,
}

impl PermissionCatalog {
    /// Build a catalog from permission definitions
    pub fn from_permissions(permissions: Vec<Permission>) -> Self {
        let permissions = permissions
            .into_iter()
            .map(|p| (p.code.clone(), p))
            .collect();
        Self { permissions }
    }

    /// Get a permission by code
    pub fn get(&self, code: &str) -> Option<&Permission> {
        self.permissions.get(code)
    }

    /// Whether the catalog contains the code
    pub fn contains(&self, code: &str) -> bool {
        self.permissions.contains_key(code)
    }

    /// List all permissions
    pub fn list(&self) -> Vec<&Permission> {
        self.permissions.values().collect()
    }

    /// Number of catalog entries
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

fn permission(
    resource: &str,
    action: PermissionAction,
    name: &str,
    description: &str,
) -> Permission {
    let action_str = match action {
        PermissionAction::Create => "create",
        PermissionAction::Read => "read",
        PermissionAction::Update => "update",
        PermissionAction::Delete => "delete",
        PermissionAction::Execute => "execute",
        PermissionAction::Wildcard => "*",
    };
    Permission {
        code: format!("{}.{}", resource, action_str),
        name: name.to_string(),
        description: description.to_string(),
        resource: resource.to_string(),
        action,
        is_system: true,
    }
}

/// Built-in permission vocabulary for the fuel-retail domain
///
/// Used as the default catalog when configuration does not supply one.
pub fn builtin_permissions() -> Vec<Permission> {
    use PermissionAction::*;

    let mut permissions = vec![
        // Network management
        permission("networks", Read, "View networks", "View fuel network data"),
        permission("networks", Create, "Create networks", "Register new fuel networks"),
        permission("networks", Update, "Edit networks", "Edit fuel network data"),
        permission("networks", Delete, "Delete networks", "Remove fuel networks"),
        // Trading point management
        permission("trading_points", Read, "View trading points", "View trading point data"),
        permission("trading_points", Create, "Create trading points", "Register new trading points"),
        permission("trading_points", Update, "Edit trading points", "Edit trading point data"),
        permission("trading_points", Delete, "Delete trading points", "Remove trading points"),
        // Pricing
        permission("prices", Read, "View prices", "View fuel prices"),
        permission("prices", Create, "Create prices", "Create fuel price entries"),
        permission("prices", Update, "Edit prices", "Change fuel prices"),
        permission("prices", Delete, "Delete prices", "Remove fuel price entries"),
        // Tanks
        permission("tanks", Read, "View tanks", "View tank levels and parameters"),
        permission("tanks", Create, "Create tanks", "Register new tanks"),
        permission("tanks", Update, "Edit tanks", "Edit tank parameters"),
        permission("tanks", Delete, "Delete tanks", "Remove tanks"),
        // Nomenclature
        permission("nomenclature", Read, "View nomenclature", "View the fuel nomenclature"),
        permission("nomenclature", Create, "Create nomenclature", "Add nomenclature entries"),
        permission("nomenclature", Update, "Edit nomenclature", "Edit nomenclature entries"),
        permission("nomenclature", Delete, "Delete nomenclature", "Remove nomenclature entries"),
        // Equipment connections
        permission("connections", Read, "View connections", "View equipment connections"),
        permission("connections", Create, "Create connections", "Register equipment connections"),
        permission("connections", Update, "Edit connections", "Edit equipment connections"),
        permission("connections", Delete, "Delete connections", "Remove equipment connections"),
        // Workflows
        permission("workflows", Read, "View workflows", "View workflow definitions"),
        permission("workflows", Create, "Create workflows", "Create workflow definitions"),
        permission("workflows", Update, "Edit workflows", "Edit workflow definitions"),
        permission("workflows", Delete, "Delete workflows", "Remove workflow definitions"),
        permission("workflows", Execute, "Run workflows", "Execute workflow commands"),
        // User management
        permission("users", Read, "View users", "View user accounts"),
        permission("users", Create, "Create users", "Create user accounts"),
        permission("users", Update, "Edit users", "Edit user accounts and their roles"),
        permission("users", Delete, "Delete users", "Remove user accounts"),
        // Role management
        permission("roles", Read, "View roles", "View role definitions"),
        permission("roles", Create, "Create roles", "Create role definitions"),
        permission("roles", Update, "Edit roles", "Edit role definitions"),
        permission("roles", Delete, "Delete roles", "Remove role definitions"),
        // Reporting
        permission("reports", Read, "View reports", "View sales and stock reports"),
    ];

    permissions.push(Permission {
        code: "system.admin".to_string(),
        name: "System administration".to_string(),
        description: "Full system administration access".to_string(),
        resource: "system".to_string(),
        action: PermissionAction::Wildcard,
        is_system: true,
    });
    permissions.push(Permission {
        code: "*".to_string(),
        name: "All permissions".to_string(),
        description: "Every permission on every resource".to_string(),
        resource: "*".to_string(),
        action: PermissionAction::Wildcard,
        is_system: true,
    });

    permissions
}
