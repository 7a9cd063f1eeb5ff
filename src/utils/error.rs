//! Error types for the RBAC library

use thiserror::Error;

/// Result type alias for the RBAC library
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for the RBAC library
///
/// Access decisions themselves never error; these variants cover
/// configuration loading and registry mutation guards only.
#[derive(Error, Debug)]
pub enum RbacError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Authorization errors (e.g. attempts to mutate system roles)
    #[error("Authorization error: {0}")]
    Authorization(String),
}

impl RbacError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an authorization error
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization(message.into())
    }
}
