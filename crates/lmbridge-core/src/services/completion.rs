//! The generation orchestrator.
//!
//! Runs one completion request against the shared engine: resolve the
//! model, make sure it is loaded, wipe conversation history, mirror the
//! prompt into the host transcript, generate, and mirror the response
//! back. The engine lock is held for the whole sequence, so requests
//! serialize and the externally-stateless contract holds over the stateful
//! engine.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::completion::{CompletionRequest, CompletionResult};
use crate::engine_context::EngineContext;
use crate::error::CompletionError;
use crate::ports::engine::GenerationParams;
use crate::services::resolver::ModelResolver;
use crate::transcript::{TranscriptEntry, TranscriptNotifier};

pub struct CompletionService {
    resolver: ModelResolver,
    engine: Arc<Mutex<EngineContext>>,
    transcript: TranscriptNotifier,
}

impl CompletionService {
    pub fn new(
        resolver: ModelResolver,
        engine: Arc<Mutex<EngineContext>>,
        transcript: TranscriptNotifier,
    ) -> Self {
        Self {
            resolver,
            engine,
            transcript,
        }
    }

    /// Run one normalized request to completion.
    pub async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResult, CompletionError> {
        let resolved = self
            .resolver
            .find(&request.model)
            .await?
            .ok_or_else(|| CompletionError::UnknownModel(request.model.clone()))?;

        if request.prompts.len() > 1 {
            warn!(
                ignored = request.prompts.len() - 1,
                "multi-prompt request; only the first prompt is generated"
            );
        }
        debug!(
            n = request.n,
            stream = request.stream,
            echo = request.echo,
            presence_penalty = request.presence_penalty,
            frequency_penalty = request.frequency_penalty,
            best_of = request.best_of,
            "fields accepted for wire compatibility, not honored by generation"
        );

        let mut ctx = self.engine.lock().await;

        ctx.ensure_loaded(&resolved.model.file_name)
            .await
            .map_err(CompletionError::from)?;

        ctx.reset_history().await;

        let prompt = request.first_prompt().to_string();
        // The transcript must record the attempt before generation runs.
        self.transcript
            .notify(TranscriptEntry::Prompt(prompt.clone()))
            .await?;

        let params = GenerationParams {
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            top_p: request.top_p,
            stop: request.stop.clone(),
            defaults: ctx.sampling_defaults().clone(),
        };
        let output = ctx.generate(&prompt, &params).await?;

        self.transcript
            .notify(TranscriptEntry::Response(output.text.clone()))
            .await?;

        Ok(CompletionResult::from_counts(
            output.text,
            output.prompt_tokens,
            output.total_tokens,
        ))
    }
}
