//! Installed-model registry port.
//!
//! The registry/download manager owns the list of models; the bridge reads
//! it and keeps no cache of its own.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::domain::InstalledModel;

/// Errors from the registry collaborator.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to query model registry: {0}")]
    QueryFailed(String),
}

/// Read-only view of the installed-model registry.
#[async_trait]
pub trait ModelCatalog: Send + Sync + fmt::Debug {
    /// All models known to the registry, installed or not. Callers filter
    /// on the `installed` flag.
    async fn models(&self) -> Result<Vec<InstalledModel>, CatalogError>;
}
