//! # fuelnet-rbac
//!
//! Scope-aware role-based access control for fuel-retail network management
//! platforms. The library decides whether a user, through one or more role
//! assignments (each optionally scoped to a network or trading point, each
//! with an optional expiry), may perform an action on a resource.
//!
//! The whole core is synchronous and pure: callers own the role and
//! assignment lists and pass them in on every call. Nothing here performs
//! I/O, and every check returns a structured decision instead of an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use fuelnet_rbac::{
//!     AccessScope, RbacConfig, RbacEngine, Role, RoleAssignment, ScopeLevel,
//! };
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = RbacEngine::new(&RbacConfig::default())?;
//!
//!     let roles = vec![
//!         Role::new("r1", "net_admin", ScopeLevel::Network)
//!             .with_permissions(["prices.update"]),
//!     ];
//!     let assignments = vec![
//!         RoleAssignment::new("u1", "r1", "admin").for_network("N1"),
//!     ];
//!
//!     let decision = engine.check_access(
//!         &assignments,
//!         &roles,
//!         "prices.update",
//!         &AccessScope::network("N1"),
//!     );
//!     assert!(decision.has_access);
//!     println!("{}", decision.reason);
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod rbac;
pub mod utils;

// Re-export main types
pub use config::RbacConfig;
pub use rbac::{
    AccessDecision, AccessScope, AssignmentDecision, Permission, PermissionAction,
    PermissionCatalog, PermissionGrant, RbacEngine, Role, RoleAssignment, RoleDraft,
    RoleHierarchyNode, RoleRegistry, RoleValidation, ScopeLevel, build_role_hierarchy,
    permission_matches,
};
pub use utils::error::{RbacError, Result};
