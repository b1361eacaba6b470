use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::handler;
use crate::server::AppState;

/// Build the axum router with all docshelf endpoints.
pub fn build_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/", post(handler::upload_handler))
        .route("/available", get(handler::available_handler))
        .route("/health", get(handler::health_handler))
        .nest_service("/static", ServeDir::new(&config.static_root))
        .layer(DefaultBodyLimit::max(config.max_upload_size as usize))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
