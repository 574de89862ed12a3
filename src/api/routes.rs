use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::{create_event, upload_results},
    events::{get_event_detail, get_event_results, get_events},
    health,
    standings::get_standings,
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/standings", get(get_standings))
        .route("/api/events", get(get_events))
        .route("/api/events/:id", get(get_event_detail))
        .route("/api/events/:id/results", get(get_event_results))
        .route("/api/admin/events", post(create_event))
        .route("/api/admin/results", post(upload_results))
        .with_state(state)
}
