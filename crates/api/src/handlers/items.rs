use super::scoped_list_name;
use crate::dto::{ListItemsQuery, ListItemsResponse, RemoveDomainRequest};
use crate::errors::ApiError;
use crate::middleware::Session;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::Json;
use axum::Extension;
use serde_json::{json, Value};
use warden_dns_domain::DomainError;

pub async fn get_list_items(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(name): Path<String>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<ListItemsResponse>, ApiError> {
    let list = scoped_list_name(&session, &name)?;
    let page = state
        .get_list_items
        .execute(&list, query.offset, query.limit, &query.q)?;
    Ok(Json(ListItemsResponse {
        total: page.total,
        items: page.items,
        offset: page.offset,
        limit: page.limit,
    }))
}

pub async fn remove_list_item(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(name): Path<String>,
    Json(req): Json<RemoveDomainRequest>,
) -> Result<Json<Value>, ApiError> {
    let list = scoped_list_name(&session, &name)?;
    let removed = state.remove_domain.execute(&list, &req.domain).await?;
    if !removed {
        return Err(DomainError::DomainNotInList(req.domain).into());
    }
    Ok(Json(json!({ "status": "removed" })))
}
