use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use super::{run_blocking, AppState};
use crate::api::error::ApiError;
use crate::api::models::{
    CreateEventRequest, CreatedEventResponse, UploadResultsRequest, UploadResultsResponse,
};
use crate::domain::parse_results_csv;

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<CreatedEventResponse>), ApiError> {
    let league = state.league.clone();
    let event = run_blocking(move || {
        league.create_event_admin(&request.name, &request.event_date, request.metadata())
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedEventResponse { event_id: event.id }),
    ))
}

pub async fn upload_results(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UploadResultsRequest>,
) -> Result<Json<UploadResultsResponse>, ApiError> {
    let league = state.league.clone();
    let summary = run_blocking(move || {
        let rows = parse_results_csv(request.csv.as_bytes())?;
        league.ingest(&request.event_name, &request.event_date, &rows)
    })
    .await?;

    log::info!(
        "Results upload stored {} rows for event {}",
        summary.results_created,
        summary.event_id
    );
    Ok(Json(summary.into()))
}
