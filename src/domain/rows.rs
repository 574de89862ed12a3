use std::io::Read;

use serde::Deserialize;

use crate::errors::{LeagueError, Result};

/// One unvalidated line of an ingestion batch, exactly as submitted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRow {
    #[serde(rename = "player")]
    pub player_name: String,
    pub position: String,
}

impl RawRow {
    pub fn new(player_name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            position: position.into(),
        }
    }

    /// Checks the row and returns its trimmed player name and position.
    /// `row_number` is 1-based and only used in the error message.
    pub fn validate(&self, row_number: usize) -> Result<ValidRow> {
        let player_name = self.player_name.trim();
        if player_name.is_empty() {
            return Err(LeagueError::malformed_row(row_number, "player name is blank"));
        }

        let position = self
            .position
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|p| *p > 0)
            .ok_or_else(|| {
                LeagueError::malformed_row(
                    row_number,
                    format!("position '{}' is not a positive integer", self.position.trim()),
                )
            })?;

        Ok(ValidRow {
            player_name: player_name.to_string(),
            position,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidRow {
    pub player_name: String,
    pub position: i64,
}

const REQUIRED_COLUMNS: [&str; 2] = ["player", "position"];

/// Reads a results CSV with a header row containing `player` and `position`.
/// Other columns are ignored; values are not validated here.
pub fn parse_results_csv<R: Read>(reader: R) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| LeagueError::MalformedInput(format!("unreadable CSV header: {e}")))?
        .clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(LeagueError::MalformedInput(format!(
                "CSV is missing the '{column}' column"
            )));
        }
    }

    let headers = csv::StringRecord::from(headers.iter().map(str::trim).collect::<Vec<_>>());

    csv_reader
        .records()
        .enumerate()
        .map(|(idx, record)| {
            let row_number = idx + 1;
            record
                .and_then(|r| r.deserialize::<RawRow>(Some(&headers)))
                .map_err(|e| LeagueError::malformed_row(row_number, e))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_reads_named_columns() {
        let data = "position,player,notes\n1,Alice,won\n2, Bob ,\n";
        let rows = parse_results_csv(data.as_bytes()).unwrap();

        assert_eq!(
            rows,
            vec![RawRow::new("Alice", "1"), RawRow::new(" Bob ", "2")]
        );
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let err = parse_results_csv("name,position\nAlice,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LeagueError::MalformedInput(ref msg) if msg.contains("'player'")));
    }

    #[test]
    fn test_parse_csv_short_record_names_row() {
        let err = parse_results_csv("player,position\nAlice,1\nBob\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LeagueError::MalformedInput(ref msg) if msg.starts_with("row 2:")));
    }

    #[test]
    fn test_parse_csv_header_only() {
        assert!(parse_results_csv("player,position\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_validate_trims_name() {
        let row = RawRow::new("  Alice ", " 3 ").validate(1).unwrap();
        assert_eq!(
            row,
            ValidRow {
                player_name: "Alice".to_string(),
                position: 3
            }
        );
    }

    #[test]
    fn test_validate_rejects_bad_rows() {
        for raw in [
            RawRow::new("", "1"),
            RawRow::new("   ", "1"),
            RawRow::new("Alice", "first"),
            RawRow::new("Alice", "0"),
            RawRow::new("Alice", "-2"),
            RawRow::new("Alice", "1.5"),
        ] {
            let err = raw.validate(4).unwrap_err();
            assert!(
                matches!(err, LeagueError::MalformedInput(ref msg) if msg.starts_with("row 4:")),
                "{raw:?}"
            );
        }
    }
}
