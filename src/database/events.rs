use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{Event, EventMetadata, EventOrigin};
use crate::errors::{is_unique_violation, LeagueError, Result};

const EVENT_COLUMNS: &str =
    "id, name, event_date, start_time, location, format, registration_url, description";

/// Lowest-id event matching (name, event_date) exactly.
pub fn find_by_identity(
    conn: &Connection,
    name: &str,
    event_date: NaiveDate,
) -> Result<Option<Event>> {
    let sql = format!(
        "SELECT {EVENT_COLUMNS} FROM events WHERE name = ?1 AND event_date = ?2 ORDER BY id LIMIT 1"
    );

    Ok(conn
        .query_row(&sql, params![name, event_date], parse_event_row)
        .optional()?)
}

pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Event>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1");

    Ok(conn
        .query_row(&sql, params![id], parse_event_row)
        .optional()?)
}

pub fn insert_event(
    conn: &Connection,
    name: &str,
    event_date: NaiveDate,
    metadata: &EventMetadata,
    origin: EventOrigin,
) -> Result<Event> {
    let sql = format!(
        "INSERT INTO events (name, event_date, start_time, location, format, registration_url, description, origin) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) RETURNING {EVENT_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            name,
            event_date,
            metadata.start_time,
            metadata.location,
            metadata.format,
            metadata.registration_url,
            metadata.description,
            origin.as_str()
        ],
        parse_event_row,
    )
    .map_err(|e| {
        if is_unique_violation(&e) {
            LeagueError::Conflict(format!("event '{name}' on {event_date} already exists"))
        } else {
            e.into()
        }
    })
}

fn parse_event_row(row: &rusqlite::Row) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        name: row.get(1)?,
        event_date: row.get(2)?,
        metadata: EventMetadata {
            start_time: row.get(3)?,
            location: row.get(4)?,
            format: row.get(5)?,
            registration_url: row.get(6)?,
            description: row.get(7)?,
        },
    })
}

pub fn list_all(conn: &Connection) -> Result<Vec<Event>> {
    let sql = format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_event_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::init_schema;

    fn test_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    fn may_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
    }

    #[test]
    fn test_metadata_round_trips_through_storage() {
        let conn = test_conn();
        let metadata = EventMetadata {
            start_time: Some("7:00 PM".to_string()),
            location: Some("Free Play Richardson".to_string()),
            ..Default::default()
        };

        let created = insert_event(&conn, "Cup", may_first(), &metadata, EventOrigin::Admin).unwrap();
        let found = find_by_id(&conn, created.id).unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.metadata, metadata);
    }

    #[test]
    fn test_ingest_origin_identity_is_unique() {
        let conn = test_conn();
        insert_event(&conn, "Cup", may_first(), &EventMetadata::default(), EventOrigin::Ingest).unwrap();

        let err = insert_event(&conn, "Cup", may_first(), &EventMetadata::default(), EventOrigin::Ingest)
            .unwrap_err();
        assert!(matches!(err, LeagueError::Conflict(_)));
    }

    #[test]
    fn test_admin_origin_may_collide() {
        let conn = test_conn();
        let first = insert_event(&conn, "Cup", may_first(), &EventMetadata::default(), EventOrigin::Admin).unwrap();
        insert_event(&conn, "Cup", may_first(), &EventMetadata::default(), EventOrigin::Admin).unwrap();

        assert_eq!(list_all(&conn).unwrap().len(), 2);
        let found = find_by_identity(&conn, "Cup", may_first()).unwrap().unwrap();
        assert_eq!(found.id, first.id);
    }

    #[test]
    fn test_identity_requires_exact_date() {
        let conn = test_conn();
        insert_event(&conn, "Cup", may_first(), &EventMetadata::default(), EventOrigin::Ingest).unwrap();

        let other_day = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        assert!(find_by_identity(&conn, "Cup", other_day).unwrap().is_none());
    }
}
