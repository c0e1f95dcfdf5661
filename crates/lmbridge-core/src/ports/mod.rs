//! Ports implemented by the host application's collaborators.

pub mod engine;
pub mod model_catalog;

pub use engine::{EngineError, GenerationOutput, GenerationParams, SamplingDefaults, TextEngine};
pub use model_catalog::{CatalogError, ModelCatalog};
