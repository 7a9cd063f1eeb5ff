//! Permission code matching
//!
//! Matching semantics: a held code matches a required code when the strings
//! are identical, when either side is the universal wildcard (`*`) or
//! `system.admin`, or when the held code is a prefix wildcard
//! (`resource.*` / `resource*`) and the required code starts with the prefix.

/// A role's permission grant, parsed once from its string form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionGrant {
    /// `*` or `system.admin`: matches every permission
    Universal,
    /// `resource.*` / `resource*`: matches codes starting with the prefix
    Prefix(String),
    /// A single concrete permission code
    Exact(String),
}

impl PermissionGrant {
    /// Parse a held permission code into its grant form
    pub fn parse(code: &str) -> Self {
        if code == "*" || code == "system.admin" {
            Self::Universal
        } else if let Some(prefix) = code.strip_suffix('*') {
            Self::Prefix(prefix.to_string())
        } else {
            Self::Exact(code.to_string())
        }
    }

    /// Whether this grant covers the required permission code
    pub fn matches(&self, required: &str) -> bool {
        // A universal required code matches regardless of what is held
        if required == "*" || required == "system.admin" {
            return true;
        }

        match self {
            Self::Universal => true,
            Self::Prefix(prefix) => required.starts_with(prefix.as_str()),
            Self::Exact(code) => code == required,
        }
    }
}

/// Whether a held permission code covers a required one
pub fn permission_matches(held: &str, required: &str) -> bool {
    PermissionGrant::parse(held).matches(required)
}
