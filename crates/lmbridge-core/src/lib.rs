//! Core domain types, ports, and services for the lmbridge completion
//! bridge.
//!
//! This crate knows nothing about HTTP. It defines the canonical completion
//! request/result types, the ports the host application implements (model
//! registry, generation engine), the shared [`EngineContext`], the
//! transcript rendezvous channel, and the orchestration service that runs a
//! completion end to end. The axum adapter crate maps all of this onto the
//! external wire contract.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod engine_context;
pub mod error;
pub mod ports;
pub mod services;
pub mod settings;
pub mod transcript;

// Re-export commonly used types for convenience
pub use domain::{
    CompletionRequest, CompletionResult, DEFAULT_PROMPT, InstalledModel, MODEL_FILE_PREFIX,
    MODEL_FILE_SUFFIX, ModelNamingError, RequestParseError, public_model_id,
};
pub use engine_context::EngineContext;
pub use error::CompletionError;
pub use ports::{
    CatalogError, EngineError, GenerationOutput, GenerationParams, ModelCatalog, SamplingDefaults,
    TextEngine,
};
pub use services::{CompletionService, ModelResolver, ResolveError, ResolvedModel};
pub use settings::{BridgeSettings, DEFAULT_PORT};
pub use transcript::{
    TranscriptEntry, TranscriptError, TranscriptEvents, TranscriptMessage, TranscriptNotifier,
    transcript_channel,
};

// Silence unused dev-dependency warnings; the unit tests drive the runtime
// through #[tokio::test] directly.
#[cfg(test)]
use tokio_test as _;
