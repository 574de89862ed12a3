use chrono::NaiveDate;

use crate::errors::{LeagueError, Result};

/// The (name, date) pair an ingestion batch is attributed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventIdentity {
    pub name: String,
    pub date: NaiveDate,
}

impl EventIdentity {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }

    /// Builds an identity from form text: a non-blank name, kept exactly as
    /// given, and a `YYYY-MM-DD` date.
    pub fn parse(name: &str, date: &str) -> Result<Self> {
        let name = parse_event_name(name)?;
        let date = parse_event_date(date)?;
        Ok(Self { name, date })
    }
}

pub fn parse_event_name(name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(LeagueError::MalformedInput("event name is blank".to_string()));
    }
    Ok(name.to_string())
}

pub fn parse_event_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").map_err(|_| {
        LeagueError::MalformedInput(format!(
            "event date '{}' is not a YYYY-MM-DD date",
            date.trim()
        ))
    })
}
