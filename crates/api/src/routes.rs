use crate::handlers;
use crate::middleware::session_context;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/lists/create", post(handlers::create_list))
        .route("/lists", get(handlers::get_lists))
        .route("/lists/", get(handlers::get_lists))
        .route("/lists/{name}/append", post(handlers::append_list))
        .route("/lists/{name}/replace", post(handlers::replace_list))
        .route("/lists/{name}/delete", delete(handlers::delete_list))
        .route(
            "/lists/items/{name}",
            get(handlers::get_list_items).delete(handlers::remove_list_item),
        )
        .route(
            "/config",
            get(handlers::get_config).post(handlers::update_config),
        )
        .route("/reload", post(handlers::reload))
        .route("/validate", post(handlers::validate))
        .route("/analytics", get(handlers::get_analytics))
        .route(
            "/logs",
            get(handlers::get_logs).delete(handlers::delete_logs),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_context,
        ))
        .with_state(state)
}
