//! RBAC engine core
//!
//! The engine owns the injected permission catalog and hosts the access
//! evaluator, role validator, and delegation guard. It holds no role or
//! assignment state: callers supply the current role and assignment lists
//! on every call and re-fetch them from their store when staleness matters.

use tracing::{debug, info};

use crate::config::RbacConfig;
use crate::utils::error::{RbacError, Result};

use super::catalog::PermissionCatalog;

/// Scope-aware access control engine
#[derive(Debug, Clone)]
pub struct RbacEngine {
    /// Engine configuration
    pub(super) config: RbacConfig,
    /// Injected permission catalog
    pub(super) catalog: PermissionCatalog,
}

impl RbacEngine {
    /// Create an engine from configuration
    pub fn new(config: &RbacConfig) -> Result<Self> {
        info!("Initializing RBAC engine");

        config.validate().map_err(RbacError::config)?;
        let catalog = PermissionCatalog::from_permissions(config.permissions.clone());
        debug!("Loaded {} catalog permissions", catalog.len());

        Ok(Self {
            config: config.clone(),
            catalog,
        })
    }

    /// The injected permission catalog
    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    /// The engine configuration
    pub fn config(&self) -> &RbacConfig {
        &self.config
    }
}

impl Default for RbacEngine {
    fn default() -> Self {
        // The built-in catalog needs no validation pass
        let config = RbacConfig::default();
        let catalog = PermissionCatalog::from_permissions(config.permissions.clone());
        Self { config, catalog }
    }
}
