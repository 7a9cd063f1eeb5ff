//! Scope-aware role-based access control
//!
//! Decides whether a user, through one or more role assignments, may perform
//! an action on a resource at a requested scope, and guards role definition
//! and delegation.

pub mod catalog;
mod delegation;
mod evaluator;
pub mod hierarchy;
mod matching;
pub mod registry;
mod system;
pub mod types;
mod validator;

// Re-export public types and structs
pub use catalog::PermissionCatalog;
pub use hierarchy::build_role_hierarchy;
pub use matching::{PermissionGrant, permission_matches};
pub use registry::RoleRegistry;
pub use system::RbacEngine;
pub use types::{
    AccessDecision, AccessScope, AssignmentDecision, Permission, PermissionAction, Role,
    RoleAssignment, RoleDraft, RoleHierarchyNode, RoleValidation, ScopeLevel,
};
