//! Model listing and lookup handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::{ModelJson, ModelListJson};
use crate::error::HttpError;
use crate::state::AppState;

/// List installed models.
pub async fn list(State(state): State<AppState>) -> Result<Json<ModelListJson>, HttpError> {
    let resolved = state.resolver.list().await?;
    let data = resolved
        .iter()
        .map(|entry| ModelJson::for_model_id(&entry.public_id))
        .collect();
    Ok(Json(ModelListJson::new(data)))
}

/// Fetch a single installed model by public id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ModelJson>, HttpError> {
    match state.resolver.find(&id).await? {
        Some(entry) => Ok(Json(ModelJson::for_model_id(&entry.public_id))),
        None => Err(HttpError::NotFound(format!("no installed model named {id}"))),
    }
}
