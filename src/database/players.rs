use rusqlite::{params, Connection, OptionalExtension};

use super::models::Player;
use crate::errors::{is_unique_violation, LeagueError, Result};

pub fn find_by_name(conn: &Connection, name: &str) -> Result<Option<Player>> {
    let sql = "SELECT id, name FROM players WHERE name = ?1";

    Ok(conn
        .query_row(sql, params![name], parse_player_row)
        .optional()?)
}

/// Insert a new player. A name that already exists yields `Conflict`.
pub fn insert_player(conn: &Connection, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name";

    conn.query_row(sql, params![name], parse_player_row)
        .map_err(|e| {
            if is_unique_violation(&e) {
                LeagueError::Conflict(format!("player '{name}' already exists"))
            } else {
                e.into()
            }
        })
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[cfg(test)]
pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = "SELECT id, name FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
