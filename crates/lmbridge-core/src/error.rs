//! Completion-path error taxonomy.
//!
//! Every variant is terminal for its request; nothing in this core retries.
//! The axum adapter maps each variant to a single HTTP status.

use thiserror::Error;

use crate::domain::completion::RequestParseError;
use crate::domain::model::ModelNamingError;
use crate::ports::engine::EngineError;
use crate::ports::model_catalog::CatalogError;
use crate::services::resolver::ResolveError;
use crate::transcript::TranscriptError;

#[derive(Debug, Error)]
pub enum CompletionError {
    /// Request bytes were not a usable JSON object.
    #[error("request body is not a usable JSON object: {0}")]
    MalformedInput(String),

    /// The required `model` field was absent.
    #[error("request body is missing required field `{0}`")]
    MissingField(&'static str),

    /// No installed model matches the requested public id.
    #[error("no installed model matches `{0}`")]
    UnknownModel(String),

    /// Loading or swapping the model failed.
    #[error("model load failed: {0}")]
    LoadFailure(String),

    /// The generation run failed.
    #[error("generation failed: {0}")]
    GenerationFailure(String),

    /// The UI actor failed to acknowledge a transcript entry in time.
    #[error("transcript notification failed: {0}")]
    TranscriptUnavailable(#[from] TranscriptError),

    /// The registry handed out a file name violating the naming
    /// convention.
    #[error("registry contract violation: {0}")]
    Naming(#[from] ModelNamingError),

    /// The registry itself could not be queried.
    #[error("model registry unavailable: {0}")]
    Registry(#[from] CatalogError),
}

impl From<RequestParseError> for CompletionError {
    fn from(err: RequestParseError) -> Self {
        match err {
            RequestParseError::MalformedInput(msg) => Self::MalformedInput(msg),
            RequestParseError::MissingField(name) => Self::MissingField(name),
        }
    }
}

impl From<EngineError> for CompletionError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::LoadFailed { .. } => Self::LoadFailure(err.to_string()),
            EngineError::GenerationFailed(msg) => Self::GenerationFailure(msg),
        }
    }
}

impl From<ResolveError> for CompletionError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Registry(e) => Self::Registry(e),
            ResolveError::Naming(e) => Self::Naming(e),
        }
    }
}
