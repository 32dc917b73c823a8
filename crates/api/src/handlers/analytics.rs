use crate::state::AppState;
use axum::extract::State;
use axum::response::Json;
use warden_dns_domain::AnalyticsSnapshot;

pub async fn get_analytics(State(state): State<AppState>) -> Json<AnalyticsSnapshot> {
    Json(state.get_analytics.execute())
}
