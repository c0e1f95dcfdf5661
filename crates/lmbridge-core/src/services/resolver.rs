//! Public-id resolution over the installed-model registry.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::model::{InstalledModel, ModelNamingError};
use crate::ports::model_catalog::{CatalogError, ModelCatalog};

/// A registry entry paired with its derived public id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    pub public_id: String,
    pub model: InstalledModel,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Registry(#[from] CatalogError),

    #[error(transparent)]
    Naming(#[from] ModelNamingError),
}

/// Maps public model identifiers to installed registry entries and back.
///
/// A pure view over the registry's current contents; nothing is cached
/// here.
#[derive(Debug, Clone)]
pub struct ModelResolver {
    catalog: Arc<dyn ModelCatalog>,
}

impl ModelResolver {
    pub fn new(catalog: Arc<dyn ModelCatalog>) -> Self {
        Self { catalog }
    }

    /// Every installed model with its public id, in registry order.
    pub async fn list(&self) -> Result<Vec<ResolvedModel>, ResolveError> {
        let mut resolved = Vec::new();
        for model in self.catalog.models().await? {
            if !model.installed {
                continue;
            }
            let public_id = model.public_id()?;
            resolved.push(ResolvedModel { public_id, model });
        }
        Ok(resolved)
    }

    /// Look up a single installed model by public id.
    pub async fn find(&self, public_id: &str) -> Result<Option<ResolvedModel>, ResolveError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .find(|resolved| resolved.public_id == public_id))
    }
}
