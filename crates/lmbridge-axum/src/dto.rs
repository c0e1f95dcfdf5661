//! External wire schema for the completion API.
//!
//! The structures here are kept compatible with the third-party
//! text-completion REST contract so existing client SDKs work without
//! modification.

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use lmbridge_core::CompletionResult;

// The registry keeps neither creation times nor ownership; the contract
// only requires the fields to be present and opaque.
const MODEL_CREATED: &str = "unknown";
const MODEL_OWNER: &str = "local";
const PERMISSION_ID: &str = "modelperm-local";

// ─────────────────────────────────────────────────────────────────────────────
// Models
// ─────────────────────────────────────────────────────────────────────────────

/// `GET /v1/models` response envelope.
#[derive(Debug, Serialize)]
pub struct ModelListJson {
    /// Always `"list"`.
    pub object: &'static str,
    pub data: Vec<ModelJson>,
}

impl ModelListJson {
    pub fn new(data: Vec<ModelJson>) -> Self {
        Self {
            object: "list",
            data,
        }
    }
}

/// A single model descriptor in the external schema.
#[derive(Debug, Serialize)]
pub struct ModelJson {
    pub id: String,
    /// Always `"model"`.
    pub object: &'static str,
    pub created: &'static str,
    pub owned_by: &'static str,
    pub root: String,
    /// Always null.
    pub parent: Option<String>,
    pub permissions: Vec<ModelPermissionJson>,
}

impl ModelJson {
    /// Build the external descriptor for a public model id.
    pub fn for_model_id(id: &str) -> Self {
        Self {
            id: id.to_string(),
            object: "model",
            created: MODEL_CREATED,
            owned_by: MODEL_OWNER,
            root: id.to_string(),
            parent: None,
            permissions: vec![ModelPermissionJson::view_only()],
        }
    }
}

/// Permission block attached to every model descriptor.
#[derive(Debug, Serialize)]
pub struct ModelPermissionJson {
    pub id: &'static str,
    /// Always `"model_permission"`.
    pub object: &'static str,
    pub created: &'static str,
    pub allow_create_engine: bool,
    pub allow_sampling: bool,
    pub allow_logprobs: bool,
    pub allow_search_indices: bool,
    pub allow_view: bool,
    pub allow_fine_tuning: bool,
    pub organization: &'static str,
    /// Always null.
    pub group: Option<String>,
    pub is_blocking: bool,
}

impl ModelPermissionJson {
    fn view_only() -> Self {
        Self {
            id: PERMISSION_ID,
            object: "model_permission",
            created: MODEL_CREATED,
            allow_create_engine: false,
            allow_sampling: false,
            allow_logprobs: false,
            allow_search_indices: false,
            allow_view: true,
            allow_fine_tuning: false,
            organization: "*",
            group: None,
            is_blocking: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Completions
// ─────────────────────────────────────────────────────────────────────────────

/// `POST /v1/completions` success response.
#[derive(Debug, Serialize)]
pub struct CompletionJson {
    pub id: String,
    /// Always `"text_completion"`.
    pub object: &'static str,
    /// Epoch seconds.
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChoiceJson>,
    pub usage: UsageJson,
}

#[derive(Debug, Serialize)]
pub struct ChoiceJson {
    pub text: String,
    pub index: u32,
    /// Always null; logprobs are not produced.
    pub logprobs: Option<serde_json::Value>,
    pub finish_reason: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UsageJson {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl CompletionJson {
    /// Serialize a completion result for the wire.
    ///
    /// `finish_reason` is always `"stop"`, whatever actually ended the
    /// run; clients depend on the field being present more than on it
    /// being true.
    pub fn build(model: &str, result: &CompletionResult) -> Self {
        Self {
            id: format!("cmpl-{}", Uuid::new_v4()),
            object: "text_completion",
            created: Utc::now().timestamp(),
            model: model.to_string(),
            choices: vec![ChoiceJson {
                text: result.text.clone(),
                index: 0,
                logprobs: None,
                finish_reason: "stop",
            }],
            usage: UsageJson {
                prompt_tokens: result.prompt_tokens,
                completion_tokens: result.completion_tokens,
                total_tokens: result.total_tokens(),
            },
        }
    }
}
