use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::{run_blocking, AppState};
use crate::api::error::ApiError;
use crate::api::models::StandingItem;

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StandingItem>>, ApiError> {
    let league = state.league.clone();
    let standings = run_blocking(move || league.standings()).await?;
    Ok(Json(StandingItem::ranked(standings)))
}
