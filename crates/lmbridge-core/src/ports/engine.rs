//! Text-generation engine port.
//!
//! The engine is the host application's single stateful generation
//! instance. The bridge never constructs one; it receives a boxed
//! implementation at the composition root and serializes access through
//! [`EngineContext`](crate::engine_context::EngineContext).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

const fn default_top_k() -> i32 {
    40
}
const fn default_n_batch() -> i32 {
    8
}
const fn default_repeat_penalty() -> f32 {
    1.1
}
const fn default_repeat_last_n() -> i32 {
    64
}
const fn default_n_threads() -> u32 {
    4
}

/// Process-wide sampling knobs the bridge does not expose to clients.
///
/// Requests may set max_tokens, temperature, and top_p; everything here
/// always comes from host settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingDefaults {
    #[serde(default = "default_top_k")]
    pub top_k: i32,
    #[serde(default = "default_n_batch")]
    pub n_batch: i32,
    #[serde(default = "default_repeat_penalty")]
    pub repeat_penalty: f32,
    /// Window of trailing tokens the repeat penalty applies to.
    #[serde(default = "default_repeat_last_n")]
    pub repeat_last_n: i32,
    #[serde(default = "default_n_threads")]
    pub n_threads: u32,
}

impl Default for SamplingDefaults {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            n_batch: default_n_batch(),
            repeat_penalty: default_repeat_penalty(),
            repeat_last_n: default_repeat_last_n(),
            n_threads: default_n_threads(),
        }
    }
}

/// Everything the engine needs for one generation call.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Request-supplied; passed through uninspected.
    pub max_tokens: i32,
    pub temperature: f32,
    pub top_p: f32,
    /// Ordered stop sequences from the request; an engine may honor them.
    pub stop: Vec<String>,
    /// Host-side knobs, never request-supplied.
    pub defaults: SamplingDefaults,
}

/// Raw engine output for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub text: String,
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u32,
    /// Tokens processed in total (prompt + response).
    pub total_tokens: u32,
}

/// Errors from the engine collaborator.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Loading or swapping the model file failed (e.g. resource
    /// exhaustion).
    #[error("failed to load model `{model}`: {reason}")]
    LoadFailed { model: String, reason: String },

    /// The generation run itself failed.
    #[error("generation failed: {0}")]
    GenerationFailed(String),
}

/// Port over the embedded generation engine.
///
/// Exactly one engine instance exists per process. Implementations are not
/// required to be `Sync`; callers hold the context lock across every call.
#[async_trait]
pub trait TextEngine: Send + fmt::Debug {
    /// Load the given model file, replacing whatever is currently loaded.
    /// May be slow.
    async fn load(&mut self, file_name: &str) -> Result<(), EngineError>;

    /// Clear accumulated conversation history without unloading the model.
    async fn reset(&mut self);

    /// Run one generation to completion. The prompt is passed through
    /// unmodified; no template wrapping happens at this seam.
    async fn generate(
        &mut self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationOutput, EngineError>;
}
