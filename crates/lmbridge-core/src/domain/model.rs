//! Installed-model descriptors and public id derivation.
//!
//! The registry stores model files as `ggml-<id>.bin`; the external API
//! exposes the `<id>` part. Derivation is pure and bijective over that
//! convention. A stored name that violates it is a contract failure of the
//! registry collaborator and surfaces as an error rather than a guess.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed prefix every installed model file name carries.
pub const MODEL_FILE_PREFIX: &str = "ggml-";

/// Fixed suffix every installed model file name carries.
pub const MODEL_FILE_SUFFIX: &str = ".bin";

/// A model as reported by the installed-model registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledModel {
    /// Stored file name, e.g. `ggml-mpt-7b-chat.bin`.
    pub file_name: String,
    /// Whether the file is actually present on disk.
    pub installed: bool,
}

impl InstalledModel {
    pub fn new(file_name: impl Into<String>, installed: bool) -> Self {
        Self {
            file_name: file_name.into(),
            installed,
        }
    }

    /// Public identifier derived from the stored file name.
    pub fn public_id(&self) -> Result<String, ModelNamingError> {
        public_model_id(&self.file_name)
    }
}

/// A registry file name that violates the `ggml-*.bin` convention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelNamingError {
    #[error("model file name `{0}` is missing the `ggml-` prefix")]
    MissingPrefix(String),
    #[error("model file name `{0}` is missing the `.bin` suffix")]
    MissingSuffix(String),
}

/// Derive the public model id from a stored file name.
pub fn public_model_id(file_name: &str) -> Result<String, ModelNamingError> {
    let stem = file_name
        .strip_prefix(MODEL_FILE_PREFIX)
        .ok_or_else(|| ModelNamingError::MissingPrefix(file_name.to_string()))?;
    let id = stem
        .strip_suffix(MODEL_FILE_SUFFIX)
        .ok_or_else(|| ModelNamingError::MissingSuffix(file_name.to_string()))?;
    Ok(id.to_string())
}
