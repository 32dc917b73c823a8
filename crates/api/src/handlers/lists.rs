use super::{scoped_list_name, source_from};
use crate::dto::{AppendListRequest, CreateListRequest, ReplaceListRequest};
use crate::errors::ApiError;
use crate::middleware::Session;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Json;
use axum::Extension;
use std::collections::HashMap;
use tracing::debug;

pub async fn create_list(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<CreateListRequest>,
) -> Result<String, ApiError> {
    let source = source_from(req.url, req.items)?;
    let (name, added) = state
        .create_list
        .execute(req.name, source, session.device_id.as_deref())
        .await?;
    Ok(format!("added {added} lines to {name}\n"))
}

pub async fn append_list(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(name): Path<String>,
    Json(req): Json<AppendListRequest>,
) -> Result<String, ApiError> {
    let list = scoped_list_name(&session, &name)?;
    let source = source_from(req.url, req.items)?;
    let added = state.append_to_list.execute(&list, source).await?;
    Ok(format!("added {added} lines to {name}\n"))
}

pub async fn replace_list(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(name): Path<String>,
    Json(req): Json<ReplaceListRequest>,
) -> Result<String, ApiError> {
    let list = scoped_list_name(&session, &name)?;
    let written = state.replace_list.execute(&list, &req.url).await?;
    Ok(format!("wrote {written} lines to {name}\n"))
}

pub async fn delete_list(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(name): Path<String>,
) -> Result<String, ApiError> {
    let list = scoped_list_name(&session, &name)?;
    state
        .delete_list
        .execute(&list, session.device_id.as_deref())
        .await?;
    Ok("deleted\n".to_string())
}

pub async fn get_lists(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Json<HashMap<String, usize>>, ApiError> {
    let lists = state
        .get_lists
        .execute(session.device_id.as_deref())
        .await?;
    debug!(count = lists.len(), "Lists retrieved");
    Ok(Json(lists))
}
