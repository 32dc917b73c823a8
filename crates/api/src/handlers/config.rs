use crate::dto::UpdateBlockingRequest;
use crate::state::AppState;
use axum::extract::State;
use axum::response::Json;
use std::sync::Arc;
use tracing::info;
use warden_dns_domain::BlockingPlan;

pub async fn get_config(State(state): State<AppState>) -> Json<BlockingPlan> {
    Json(**state.blocking.load())
}

/// Swap in an updated blocking plan; queries already past their plan read
/// finish under the old one.
pub async fn update_config(
    State(state): State<AppState>,
    Json(req): Json<UpdateBlockingRequest>,
) -> Json<BlockingPlan> {
    let current = **state.blocking.load();
    let updated = BlockingPlan {
        mode: req.mode.unwrap_or(current.mode),
        block_page_ip: req.block_page_ip.unwrap_or(current.block_page_ip),
    };
    state.blocking.store(Arc::new(updated));

    info!(mode = ?updated.mode, block_page_ip = %updated.block_page_ip, "Blocking plan updated");
    Json(updated)
}
