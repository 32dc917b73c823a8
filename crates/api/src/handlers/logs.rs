use crate::dto::LogsQuery;
use crate::errors::ApiError;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::{json, Value};
use warden_dns_domain::QueryRecord;

const DEFAULT_LOG_LIMIT: usize = 100;

pub async fn get_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Json<Vec<QueryRecord>> {
    let limit = query.limit.unwrap_or(DEFAULT_LOG_LIMIT);
    Json(state.get_recent_queries.execute(limit))
}

pub async fn delete_logs(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.clear_logs.execute().await?;
    Ok(Json(json!({ "status": "deleted" })))
}
