use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

/// Failure kinds surfaced by the results and standings core.
#[derive(Error, Debug)]
pub enum LeagueError {
    /// Requested event does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Creation collided with a uniqueness constraint
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Submitted batch or form could not be interpreted
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Database error: {0}")]
    Persistence(#[from] rusqlite::Error),

    #[error("Database pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

impl LeagueError {
    pub fn malformed_row(row: usize, reason: impl std::fmt::Display) -> Self {
        LeagueError::MalformedInput(format!("row {row}: {reason}"))
    }

    /// True for storage-level failures that the core never retries.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, LeagueError::Persistence(_) | LeagueError::Pool(_))
    }
}

/// Whether a SQLite error is a UNIQUE constraint violation.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(inner, _) => {
            inner.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_unique_violation_detected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("CREATE TABLE t (name TEXT NOT NULL UNIQUE); INSERT INTO t VALUES ('a');")
            .unwrap();

        let err = conn.execute("INSERT INTO t VALUES ('a')", []).unwrap_err();
        assert!(is_unique_violation(&err));

        let other = conn.execute("INSERT INTO missing VALUES (1)", []).unwrap_err();
        assert!(!is_unique_violation(&other));
    }

    #[test]
    fn test_malformed_row_message_names_row() {
        let err = LeagueError::malformed_row(3, "position 'x' is not a positive integer");
        assert_eq!(
            err.to_string(),
            "Malformed input: row 3: position 'x' is not a positive integer"
        );
        assert!(!err.is_persistence_failure());
    }
}
