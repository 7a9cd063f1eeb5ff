//! RBAC type definitions

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Breadth level of a role
///
/// Ordered by breadth: `Global` > `Network` > `TradingPoint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeLevel {
    /// Applies across every network and trading point
    Global,
    /// Applies within a single fuel network
    Network,
    /// Applies within a single trading point
    TradingPoint,
}

impl ScopeLevel {
    /// Snake-case name used in reason strings and serialized data
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Network => "network",
            Self::TradingPoint => "trading_point",
        }
    }
}

impl fmt::Display for ScopeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action part of a permission code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    Create,
    Read,
    Update,
    Delete,
    Execute,
    /// Covers every action on the resource (`resource.*`) or the whole
    /// system (`*`, `system.admin`)
    Wildcard,
}

/// Permission definition
///
/// Catalog entries are immutable after load; the catalog is a process-wide
/// constant table supplied through configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Permission {
    /// Unique permission code (`resource.action`, `resource.*`, or `*`)
    pub code: String,
    /// Display name
    pub name: String,
    /// Permission description
    pub description: String,
    /// Resource this permission applies to
    pub resource: String,
    /// Action this permission allows
    pub action: PermissionAction,
    /// Whether this is a built-in permission
    #[serde(default)]
    pub is_system: bool,
}

/// Role definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Unique role id
    pub id: String,
    /// Display name
    pub name: String,
    /// Unique human-chosen slug
    pub code: String,
    /// Role description
    #[serde(default)]
    pub description: String,
    /// Breadth level the role's permissions apply at
    pub scope: ScopeLevel,
    /// Permission codes granted by this role (wildcards allowed)
    pub permissions: HashSet<String>,
    /// Optional single parent role of the same scope
    #[serde(default)]
    pub parent_role_id: Option<String>,
    /// Whether this is a built-in role protected from deletion/rename
    #[serde(default)]
    pub is_system: bool,
}

impl Role {
    /// Create a role with no permissions; name defaults to the code
    pub fn new(id: impl Into<String>, code: impl Into<String>, scope: ScopeLevel) -> Self {
        let code = code.into();
        Self {
            id: id.into(),
            name: code.clone(),
            code,
            description: String::new(),
            scope,
            permissions: HashSet::new(),
            parent_role_id: None,
            is_system: false,
        }
    }

    /// Set the role's permission codes
    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the parent role id
    pub fn with_parent(mut self, parent_role_id: impl Into<String>) -> Self {
        self.parent_role_id = Some(parent_role_id.into());
        self
    }
}

/// Candidate role data submitted for validation before creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleDraft {
    /// Display name
    pub name: String,
    /// Unique human-chosen slug
    pub code: String,
    /// Role description
    #[serde(default)]
    pub description: String,
    /// Breadth level
    pub scope: ScopeLevel,
    /// Permission codes the role would grant
    pub permissions: HashSet<String>,
    /// Optional parent role id
    #[serde(default)]
    pub parent_role_id: Option<String>,
}

/// A user's role assignment, optionally narrowed to one org unit
///
/// An assignment is a point-in-time fact. Once `expires_at` has passed it
/// becomes inert at evaluation time; it is never deleted automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// User holding the role
    pub user_id: String,
    /// Role being held
    pub role_id: String,
    /// Concrete network the grant is narrowed to
    #[serde(default)]
    pub network_id: Option<String>,
    /// Concrete trading point the grant is narrowed to
    #[serde(default)]
    pub trading_point_id: Option<String>,
    /// User who granted the assignment
    pub granted_by: String,
    /// When the assignment was granted
    pub granted_at: DateTime<Utc>,
    /// Optional expiry; checked at evaluation time
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl RoleAssignment {
    /// Create an assignment granted now with no narrowing and no expiry
    pub fn new(
        user_id: impl Into<String>,
        role_id: impl Into<String>,
        granted_by: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            role_id: role_id.into(),
            network_id: None,
            trading_point_id: None,
            granted_by: granted_by.into(),
            granted_at: Utc::now(),
            expires_at: None,
        }
    }

    /// Narrow the grant to one network
    pub fn for_network(mut self, network_id: impl Into<String>) -> Self {
        self.network_id = Some(network_id.into());
        self
    }

    /// Narrow the grant to one trading point
    pub fn for_trading_point(mut self, trading_point_id: impl Into<String>) -> Self {
        self.trading_point_id = Some(trading_point_id.into());
        self
    }

    /// Set the expiry timestamp
    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// The concrete org-unit context an access check is performed against
///
/// Distinct from the breadth level stored on a role and the concrete unit
/// stored on an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccessScope {
    /// Deployment-wide request
    Global,
    /// Request within one network
    Network { network_id: String },
    /// Request within one trading point
    TradingPoint { trading_point_id: String },
}

impl AccessScope {
    /// Request scope for a network
    pub fn network(network_id: impl Into<String>) -> Self {
        Self::Network {
            network_id: network_id.into(),
        }
    }

    /// Request scope for a trading point
    pub fn trading_point(trading_point_id: impl Into<String>) -> Self {
        Self::TradingPoint {
            trading_point_id: trading_point_id.into(),
        }
    }

    /// The breadth level of the request
    pub fn level(&self) -> ScopeLevel {
        match self {
            Self::Global => ScopeLevel::Global,
            Self::Network { .. } => ScopeLevel::Network,
            Self::TradingPoint { .. } => ScopeLevel::TradingPoint,
        }
    }
}

/// Access check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessDecision {
    /// Whether access is granted
    pub has_access: bool,
    /// Role that granted access (if any)
    pub matched_role: Option<Role>,
    /// Human-readable grant or denial rationale
    pub reason: String,
}

/// Role validation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleValidation {
    /// Whether the candidate role passed every check
    pub is_valid: bool,
    /// All accumulated violations, for display in one pass
    pub errors: Vec<String>,
}

/// Delegation check result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentDecision {
    /// Whether the assigner may grant the role
    pub can_assign: bool,
    /// Human-readable justification or denial reason
    pub reason: String,
}

/// Node of the role hierarchy forest built for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleHierarchyNode {
    /// The role at this node
    pub role: Role,
    /// Roles whose `parent_role_id` points at this role
    pub children: Vec<RoleHierarchyNode>,
    /// Depth from the root of this node's tree (root = 0)
    pub level: usize,
}
