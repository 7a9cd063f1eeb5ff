//! Role hierarchy view
//!
//! Presentation-data transform of the parent/child role graph. Roots are all
//! roles without a parent; a visited set keeps malformed cyclic links from
//! recursing forever.

use std::collections::HashSet;

use super::types::{Role, RoleHierarchyNode};

/// Build the role hierarchy forest
pub fn build_role_hierarchy(roles: &[Role]) -> Vec<RoleHierarchyNode> {
    let mut visited = HashSet::new();

    roles
        .iter()
        .filter(|role| role.parent_role_id.is_none())
        .filter_map(|role| build_node(role, roles, 0, &mut visited))
        .collect()
}

fn build_node(
    role: &Role,
    roles: &[Role],
    level: usize,
    visited: &mut HashSet<String>,
) -> Option<RoleHierarchyNode> {
    // A role already placed in the forest grows no further subtree
    if !visited.insert(role.id.clone()) {
        return None;
    }

    let children = roles
        .iter()
        .filter(|candidate| candidate.parent_role_id.as_deref() == Some(role.id.as_str()))
        .filter_map(|child| build_node(child, roles, level + 1, visited))
        .collect();

    Some(RoleHierarchyNode {
        role: role.clone(),
        children,
        level,
    })
}
