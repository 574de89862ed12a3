use chrono::NaiveDate;
use rusqlite::Connection;

use crate::database::{events, results, Event, EventMetadata, ResultWithPlayer};
use crate::domain::{parse_event_date, parse_event_name};
use crate::errors::{LeagueError, Result};
use crate::services::resolver;

#[derive(Debug, Clone, PartialEq)]
pub struct EventListing {
    pub upcoming: Vec<Event>,
    pub past: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub event: Event,
    pub results: Vec<ResultWithPlayer>,
}

/// Splits events around `today`: today and later are upcoming (soonest
/// first), earlier ones are past (most recent first).
pub fn list_events(conn: &Connection, today: NaiveDate) -> Result<EventListing> {
    let (mut upcoming, mut past): (Vec<Event>, Vec<Event>) = events::list_all(conn)?
        .into_iter()
        .partition(|event| event.event_date >= today);

    upcoming.sort_by(|a, b| a.event_date.cmp(&b.event_date).then(a.id.cmp(&b.id)));
    past.sort_by(|a, b| b.event_date.cmp(&a.event_date).then(a.id.cmp(&b.id)));

    Ok(EventListing { upcoming, past })
}

fn require_event(conn: &Connection, event_id: i64) -> Result<Event> {
    events::find_by_id(conn, event_id)?
        .ok_or_else(|| LeagueError::NotFound(format!("event {event_id}")))
}

/// Results of one event by finishing position. Equal positions keep the order
/// they were recorded in.
pub fn results_for_event(conn: &Connection, event_id: i64) -> Result<Vec<ResultWithPlayer>> {
    require_event(conn, event_id)?;
    results_by_position(conn, event_id)
}

pub fn event_detail(conn: &Connection, event_id: i64) -> Result<EventDetail> {
    let event = require_event(conn, event_id)?;
    let results = results_by_position(conn, event_id)?;
    Ok(EventDetail { event, results })
}

fn results_by_position(conn: &Connection, event_id: i64) -> Result<Vec<ResultWithPlayer>> {
    let mut rows = results::list_for_event(conn, event_id)?;
    rows.sort_by_key(|r| r.position);
    Ok(rows)
}

/// Administrative event creation from form text.
pub fn create_event_admin(
    conn: &Connection,
    name: &str,
    event_date: &str,
    metadata: EventMetadata,
) -> Result<Event> {
    let name = parse_event_name(name)?;
    let date = parse_event_date(event_date)?;
    let event = resolver::create_event(conn, &name, date, metadata)?;
    log::info!("Created event {} ('{}' on {})", event.id, event.name, event.event_date);
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{players, test_connection};
    use crate::domain::{EventIdentity, RawRow};
    use crate::services::ingestion::ingest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn names(events: &[Event]) -> Vec<&str> {
        events.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_list_events_partitions_on_today() {
        let conn = test_connection();
        let today = date(2024, 6, 15);
        for (name, day) in [
            ("Long Ago", date(2024, 1, 1)),
            ("Next Month", date(2024, 7, 15)),
            ("Today", today),
            ("Yesterday", date(2024, 6, 14)),
            ("Tomorrow", date(2024, 6, 16)),
        ] {
            resolver::create_event(&conn, name, day, EventMetadata::default()).unwrap();
        }

        let listing = list_events(&conn, today).unwrap();

        assert_eq!(names(&listing.upcoming), vec!["Today", "Tomorrow", "Next Month"]);
        assert_eq!(names(&listing.past), vec!["Yesterday", "Long Ago"]);
    }

    #[test]
    fn test_results_sorted_by_position() {
        let mut conn = test_connection();
        let identity = EventIdentity::new("Cup", date(2024, 5, 1));
        let rows = vec![RawRow::new("Carol", "3"), RawRow::new("Alice", "1"), RawRow::new("Bob", "2")];
        let summary = ingest(&mut conn, &identity, &rows).unwrap();

        let results = results_for_event(&conn, summary.event_id).unwrap();

        let positions: Vec<i64> = results.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(results[0].player_name, "Alice");
        assert_eq!(results[0].points, 25);
    }

    #[test]
    fn test_event_detail_orders_results_by_position() {
        let mut conn = test_connection();
        let identity = EventIdentity::new("Cup", date(2024, 5, 1));
        let rows = vec![RawRow::new("Bob", "2"), RawRow::new("Carol", "3"), RawRow::new("Alice", "1")];
        let summary = ingest(&mut conn, &identity, &rows).unwrap();

        let detail = event_detail(&conn, summary.event_id).unwrap();

        assert_eq!(detail.event.id, summary.event_id);
        let names: Vec<&str> = detail.results.iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_unknown_event_is_not_found() {
        let conn = test_connection();

        assert!(matches!(results_for_event(&conn, 42), Err(LeagueError::NotFound(_))));
        assert!(matches!(event_detail(&conn, 42), Err(LeagueError::NotFound(_))));
    }

    #[test]
    fn test_event_detail_for_event_without_results() {
        let conn = test_connection();
        let event = create_event_admin(&conn, "Cup", "2024-05-01", EventMetadata::default()).unwrap();

        let detail = event_detail(&conn, event.id).unwrap();

        assert_eq!(detail.event, event);
        assert!(detail.results.is_empty());
    }

    #[test]
    fn test_create_event_admin_validates_input() {
        let conn = test_connection();

        let blank = create_event_admin(&conn, " ", "2024-05-01", EventMetadata::default());
        let bad_date = create_event_admin(&conn, "Cup", "May 1st", EventMetadata::default());

        assert!(matches!(blank, Err(LeagueError::MalformedInput(_))));
        assert!(matches!(bad_date, Err(LeagueError::MalformedInput(_))));
        assert!(events::list_all(&conn).unwrap().is_empty());
        assert!(players::list_all(&conn).unwrap().is_empty());
    }
}
