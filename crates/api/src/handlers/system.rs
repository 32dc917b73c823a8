use crate::dto::{ValidateRequest, ValidateResponse};
use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn reload(State(state): State<AppState>) -> Result<String, ApiError> {
    state.reload_lists.execute().await?;
    Ok("reloaded\n".to_string())
}

pub async fn validate(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let preview = state.validate_source.execute(&req.url).await?;
    Ok(Json(ValidateResponse {
        count: preview.count,
        sample: preview.sample,
    }))
}
