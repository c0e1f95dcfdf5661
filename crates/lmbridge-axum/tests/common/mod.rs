//! Shared fakes for the bridge integration tests.
//!
//! The fake engine is deterministic and leaks history into its output
//! unless `reset` ran, which is what lets the tests pin the context-reset
//! invariant from the outside.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use lmbridge_axum::bootstrap::bootstrap;
use lmbridge_axum::routes::create_router;
use lmbridge_core::{
    BridgeSettings, CatalogError, EngineError, GenerationOutput, GenerationParams,
    InstalledModel, ModelCatalog, TextEngine, TranscriptEntry,
};

/// Chronological record shared by the fake engine and the transcript actor.
pub type EventLog = Arc<Mutex<Vec<String>>>;

/// In-memory registry with a fixed set of entries.
#[derive(Debug)]
pub struct StaticCatalog {
    models: Vec<InstalledModel>,
}

#[async_trait]
impl ModelCatalog for StaticCatalog {
    async fn models(&self) -> Result<Vec<InstalledModel>, CatalogError> {
        Ok(self.models.clone())
    }
}

/// Deterministic engine: the completion is `max_tokens` words (capped at
/// 8), the first of which echoes the prompt. Un-reset history shows up as
/// a `[stale:..]` prefix.
#[derive(Debug)]
pub struct FakeEngine {
    log: EventLog,
    history: Vec<String>,
    remaining_load_failures: u32,
    remaining_generate_failures: u32,
}

#[async_trait]
impl TextEngine for FakeEngine {
    async fn load(&mut self, file_name: &str) -> Result<(), EngineError> {
        self.log.lock().unwrap().push(format!("load:{file_name}"));
        if self.remaining_load_failures > 0 {
            self.remaining_load_failures -= 1;
            return Err(EngineError::LoadFailed {
                model: file_name.to_string(),
                reason: "out of memory".to_string(),
            });
        }
        Ok(())
    }

    async fn reset(&mut self) {
        self.log.lock().unwrap().push("reset".to_string());
        self.history.clear();
    }

    async fn generate(
        &mut self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<GenerationOutput, EngineError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("generate:{prompt}:top_p={}", params.top_p));
        if self.remaining_generate_failures > 0 {
            self.remaining_generate_failures -= 1;
            return Err(EngineError::GenerationFailed("sampler blew up".to_string()));
        }

        let budget = params.max_tokens.clamp(0, 8) as u32;
        let mut words = Vec::new();
        if budget > 0 {
            words.push(format!("echo({prompt})"));
            for i in 1..budget {
                words.push(format!("t{i}"));
            }
        }
        let mut text = words.join(" ");
        if !self.history.is_empty() {
            text = format!("[stale:{}] {text}", self.history.join(","));
        }
        self.history.push(prompt.to_string());

        let prompt_tokens = prompt.split_whitespace().count() as u32;
        Ok(GenerationOutput {
            text,
            prompt_tokens,
            total_tokens: prompt_tokens + budget,
        })
    }
}

/// How the fake UI actor behaves.
#[derive(Debug, Clone, Copy)]
pub enum UiActor {
    /// Records entries into the log and acknowledges each one.
    Acknowledging,
    /// Drains entries but never acknowledges them.
    Silent,
    /// The receiver is dropped outright.
    Gone,
}

pub struct Stack {
    pub app: Router,
    pub log: EventLog,
}

/// Registry entries following the `ggml-<id>.bin` convention.
pub fn installed(names: &[&str]) -> Vec<InstalledModel> {
    names
        .iter()
        .map(|name| InstalledModel::new(format!("ggml-{name}.bin"), true))
        .collect()
}

/// Build a full bridge stack over the fakes with an acknowledging UI.
pub fn stack(models: Vec<InstalledModel>, ui: UiActor) -> Stack {
    stack_with(models, ui, 0, 0)
}

pub fn stack_with(
    models: Vec<InstalledModel>,
    ui: UiActor,
    load_failures: u32,
    generate_failures: u32,
) -> Stack {
    init_tracing();

    let log: EventLog = Arc::new(Mutex::new(Vec::new()));
    let engine = FakeEngine {
        log: log.clone(),
        history: Vec::new(),
        remaining_load_failures: load_failures,
        remaining_generate_failures: generate_failures,
    };

    // Short ack bound keeps the unresponsive-UI tests fast.
    let settings = BridgeSettings {
        transcript_ack_timeout_ms: 100,
        ..BridgeSettings::default()
    };

    let (context, mut events) = bootstrap(
        &settings,
        Arc::new(StaticCatalog { models }),
        Box::new(engine),
    );

    match ui {
        UiActor::Acknowledging => {
            let log = log.clone();
            tokio::spawn(async move {
                while let Some(message) = events.recv().await {
                    let tag = match &message.entry {
                        TranscriptEntry::Prompt(p) => format!("transcript:prompt:{p}"),
                        TranscriptEntry::Response(_) => "transcript:response".to_string(),
                    };
                    log.lock().unwrap().push(tag);
                    message.acknowledge();
                }
            });
        }
        UiActor::Silent => {
            tokio::spawn(async move {
                while let Some(message) = events.recv().await {
                    std::mem::forget(message);
                }
            });
        }
        UiActor::Gone => drop(events),
    }

    Stack {
        app: create_router(context),
        log,
    }
}

pub async fn get_json(stack: &Stack, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = stack
        .app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    split(response).await
}

pub async fn post_json(stack: &Stack, uri: &str, body: &[u8]) -> (StatusCode, serde_json::Value) {
    let response = stack
        .app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_vec()))
                .unwrap(),
        )
        .await
        .unwrap();
    split(response).await
}

async fn split(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
