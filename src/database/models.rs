use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub event_date: NaiveDate,
    pub metadata: EventMetadata,
}

/// Free-form descriptive fields; never interpreted by the core.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventMetadata {
    pub start_time: Option<String>,
    pub location: Option<String>,
    pub format: Option<String>,
    pub registration_url: Option<String>,
    pub description: Option<String>,
}

impl EventMetadata {
    /// Blank strings are stored as null.
    pub fn normalized(self) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            start_time: non_blank(self.start_time),
            location: non_blank(self.location),
            format: non_blank(self.format),
            registration_url: non_blank(self.registration_url),
            description: non_blank(self.description),
        }
    }
}

/// How an event row came to exist. Only ingestion-created events carry the
/// (name, event_date) uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOrigin {
    Admin,
    Ingest,
}

impl EventOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventOrigin::Admin => "admin",
            EventOrigin::Ingest => "ingest",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub id: i64,
    pub event_id: i64,
    pub player_id: i64,
    pub position: i64,
    pub points: i64,
}

// DTO for results joined with the player's name
#[derive(Debug, Clone, PartialEq)]
pub struct ResultWithPlayer {
    pub result_id: i64,
    pub event_id: i64,
    pub player_id: i64,
    pub player_name: String,
    pub position: i64,
    pub points: i64,
}
