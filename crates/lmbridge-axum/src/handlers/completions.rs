//! Completion handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use tracing::debug;

use lmbridge_core::{CompletionError, CompletionRequest};

use crate::dto::CompletionJson;
use crate::error::HttpError;
use crate::state::AppState;

/// Create a completion.
///
/// Takes the raw body so the request normalizer owns the malformed/missing
/// classification instead of axum's extractor rejections.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CompletionJson>, HttpError> {
    let request = CompletionRequest::from_json_bytes(&body).map_err(CompletionError::from)?;
    debug!(
        model = %request.model,
        prompts = request.prompts.len(),
        max_tokens = request.max_tokens,
        temperature = request.temperature,
        top_p = request.top_p,
        "completion request"
    );

    let result = state.completions.complete(&request).await?;

    let response = CompletionJson::build(&request.model, &result);
    debug!(
        id = %response.id,
        prompt_tokens = result.prompt_tokens,
        completion_tokens = result.completion_tokens,
        "completion response"
    );
    Ok(Json(response))
}
