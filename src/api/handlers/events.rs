use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;

use super::{run_blocking, AppState};
use crate::api::error::ApiError;
use crate::api::models::{EventDetailResponse, EventItem, EventListResponse, EventResultItem};

pub async fn get_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EventListResponse>, ApiError> {
    let league = state.league.clone();
    let listing = run_blocking(move || league.list_events()).await?;

    Ok(Json(EventListResponse {
        upcoming: listing.upcoming.into_iter().map(EventItem::from).collect(),
        past: listing.past.into_iter().map(EventItem::from).collect(),
    }))
}

pub async fn get_event_detail(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<i64>,
) -> Result<Json<EventDetailResponse>, ApiError> {
    let league = state.league.clone();
    let detail = run_blocking(move || league.event_detail(event_id)).await?;

    Ok(Json(EventDetailResponse {
        event: detail.event.into(),
        results: detail.results.into_iter().map(EventResultItem::from).collect(),
    }))
}

pub async fn get_event_results(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<i64>,
) -> Result<Json<Vec<EventResultItem>>, ApiError> {
    let league = state.league.clone();
    let results = run_blocking(move || league.results_for_event(event_id)).await?;
    Ok(Json(results.into_iter().map(EventResultItem::from).collect()))
}
