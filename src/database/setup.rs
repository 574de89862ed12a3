use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create any missing tables and indexes. Safe to run on every startup.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(include_str!("schema.sql"))
        .context("Failed to apply database schema")?;

    log::info!("Database schema ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();

        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('players', 'events', 'results')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 3);
    }

    #[test]
    fn test_schema_creates_ingest_identity_index() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let partial_index: String = conn
            .query_row(
                "SELECT sql FROM sqlite_master WHERE type = 'index' AND name = 'idx_events_ingest_identity'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(partial_index.contains("WHERE origin = 'ingest'"));
    }
}
