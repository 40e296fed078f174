// Presentation layer - HTTP routes and page rendering
pub mod app_state;
pub mod charts;
pub mod format;
pub mod handlers;
pub mod page;

use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, dashboard_snapshot, health_check, stream_dashboard};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .route("/api/dashboard", get(dashboard_snapshot))
        .route("/api/stream", get(stream_dashboard))
        .route("/healthz", get(health_check))
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
