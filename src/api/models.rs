use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::database::{Event, EventMetadata, ResultWithPlayer};
use crate::services::ingestion::IngestSummary;
use crate::services::standings::Standing;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingItem {
    pub rank: usize,
    pub player_name: String,
    pub total_points: i64,
    pub results_count: usize,
}

impl StandingItem {
    pub fn ranked(standings: Vec<Standing>) -> Vec<Self> {
        standings
            .into_iter()
            .enumerate()
            .map(|(i, s)| StandingItem {
                rank: i + 1,
                player_name: s.player_name,
                total_points: s.total_points,
                results_count: s.results_count,
            })
            .collect()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: i64,
    pub name: String,
    pub event_date: NaiveDate,
    pub start_time: Option<String>,
    pub location: Option<String>,
    pub format: Option<String>,
    pub registration_url: Option<String>,
    pub description: Option<String>,
}

impl From<Event> for EventItem {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            event_date: event.event_date,
            start_time: event.metadata.start_time,
            location: event.metadata.location,
            format: event.metadata.format,
            registration_url: event.metadata.registration_url,
            description: event.metadata.description,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    pub upcoming: Vec<EventItem>,
    pub past: Vec<EventItem>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResultItem {
    pub position: i64,
    pub player_name: String,
    pub points: i64,
}

impl From<ResultWithPlayer> for EventResultItem {
    fn from(row: ResultWithPlayer) -> Self {
        Self {
            position: row.position,
            player_name: row.player_name,
            points: row.points,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailResponse {
    pub event: EventItem,
    pub results: Vec<EventResultItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    pub name: String,
    pub event_date: String,
    pub start_time: Option<String>,
    pub location: Option<String>,
    pub format: Option<String>,
    pub registration_url: Option<String>,
    pub description: Option<String>,
}

impl CreateEventRequest {
    pub fn metadata(&self) -> EventMetadata {
        EventMetadata {
            start_time: self.start_time.clone(),
            location: self.location.clone(),
            format: self.format.clone(),
            registration_url: self.registration_url.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEventResponse {
    pub event_id: i64,
}

/// Results upload: `csv` carries the file text with `player` and `position`
/// columns.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResultsRequest {
    pub event_name: String,
    pub event_date: String,
    pub csv: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResultsResponse {
    pub event_id: i64,
    pub event_created: bool,
    pub players_created: usize,
    pub results_created: usize,
}

impl From<IngestSummary> for UploadResultsResponse {
    fn from(summary: IngestSummary) -> Self {
        Self {
            event_id: summary.event_id,
            event_created: summary.event_created,
            players_created: summary.players_created,
            results_created: summary.results_created,
        }
    }
}
