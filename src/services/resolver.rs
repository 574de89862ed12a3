use chrono::NaiveDate;
use rusqlite::Connection;

use crate::database::{events, players, Event, EventMetadata, EventOrigin, Player};
use crate::errors::{LeagueError, Result};

/// Outcome of a find-or-create lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<T> {
    Existing(T),
    Created(T),
}

impl<T> Resolution<T> {
    pub fn was_created(&self) -> bool {
        matches!(self, Resolution::Created(_))
    }

    pub fn into_inner(self) -> T {
        match self {
            Resolution::Existing(entity) | Resolution::Created(entity) => entity,
        }
    }
}

/// Returns the player with exactly this name, creating it if absent.
pub fn resolve_player(conn: &Connection, name: &str) -> Result<Resolution<Player>> {
    find_or_create(
        || players::find_by_name(conn, name),
        || players::insert_player(conn, name),
    )
}

/// Returns the event matching (name, date), creating a bare one if absent.
pub fn resolve_event(conn: &Connection, name: &str, date: NaiveDate) -> Result<Resolution<Event>> {
    find_or_create(
        || events::find_by_identity(conn, name, date),
        || events::insert_event(conn, name, date, &EventMetadata::default(), EventOrigin::Ingest),
    )
}

/// Administrative creation: always inserts, even if (name, date) is taken.
pub fn create_event(
    conn: &Connection,
    name: &str,
    date: NaiveDate,
    metadata: EventMetadata,
) -> Result<Event> {
    events::insert_event(conn, name, date, &metadata.normalized(), EventOrigin::Admin)
}

// A Conflict on create means another writer inserted the same identity
// between our lookup and insert; the stored row wins.
fn find_or_create<T>(
    find: impl Fn() -> Result<Option<T>>,
    create: impl FnOnce() -> Result<T>,
) -> Result<Resolution<T>> {
    if let Some(existing) = find()? {
        return Ok(Resolution::Existing(existing));
    }

    match create() {
        Ok(created) => Ok(Resolution::Created(created)),
        Err(LeagueError::Conflict(reason)) => {
            log::debug!("{reason}, re-reading stored row");
            find()?
                .map(Resolution::Existing)
                .ok_or(LeagueError::Conflict(reason))
        }
        Err(e) => Err(e),
    }
}
