//! The shared engine context.
//!
//! Exactly one `EngineContext` exists per process. It owns the engine
//! instance plus the state the external API must never let clients observe:
//! which model is loaded and the accumulated conversation history. The
//! orchestrator shares it as `Arc<tokio::sync::Mutex<EngineContext>>` and
//! holds the lock from model load through generation, so requests serialize
//! and there are no races on model identity or history.

use crate::ports::{EngineError, GenerationOutput, GenerationParams, SamplingDefaults, TextEngine};

#[derive(Debug)]
pub struct EngineContext {
    engine: Box<dyn TextEngine>,
    /// File name of the currently loaded model, if any.
    loaded: Option<String>,
    defaults: SamplingDefaults,
}

impl EngineContext {
    pub fn new(engine: Box<dyn TextEngine>, defaults: SamplingDefaults) -> Self {
        Self {
            engine,
            loaded: None,
            defaults,
        }
    }

    pub fn sampling_defaults(&self) -> &SamplingDefaults {
        &self.defaults
    }

    /// File name of the currently loaded model, if any.
    pub fn loaded_model(&self) -> Option<&str> {
        self.loaded.as_deref()
    }

    /// Make sure `file_name` is the loaded model, swapping if a different
    /// one is resident. The marker is cleared before a swap: a failed load
    /// leaves no stale claim, and the next request re-attempts the load.
    pub async fn ensure_loaded(&mut self, file_name: &str) -> Result<(), EngineError> {
        if self.loaded.as_deref() == Some(file_name) {
            return Ok(());
        }
        self.loaded = None;
        self.engine.load(file_name).await?;
        self.loaded = Some(file_name.to_string());
        Ok(())
    }

    /// Drop all conversation history. Runs unconditionally before every
    /// completion so no request observes residual state from a prior one.
    pub async fn reset_history(&mut self) {
        self.engine.reset().await;
    }

    pub async fn generate(
        &mut self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationOutput, EngineError> {
        self.engine.generate(prompt, params).await
    }
}
