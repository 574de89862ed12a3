use rusqlite::{params, Connection};

use super::models::{ResultRecord, ResultWithPlayer};
use crate::errors::Result;

pub fn insert_result(
    conn: &Connection,
    event_id: i64,
    player_id: i64,
    position: i64,
    points: i64,
) -> Result<ResultRecord> {
    let sql = "INSERT INTO results (event_id, player_id, position, points) VALUES (?1, ?2, ?3, ?4) RETURNING id, event_id, player_id, position, points";

    Ok(conn.query_row(
        sql,
        params![event_id, player_id, position, points],
        |row| {
            Ok(ResultRecord {
                id: row.get(0)?,
                event_id: row.get(1)?,
                player_id: row.get(2)?,
                position: row.get(3)?,
                points: row.get(4)?,
            })
        },
    )?)
}

fn parse_joined_row(row: &rusqlite::Row) -> rusqlite::Result<ResultWithPlayer> {
    Ok(ResultWithPlayer {
        result_id: row.get(0)?,
        event_id: row.get(1)?,
        player_id: row.get(2)?,
        player_name: row.get(3)?,
        position: row.get(4)?,
        points: row.get(5)?,
    })
}

/// Every result in insertion order, joined with the player's name.
pub fn list_all_with_players(conn: &Connection) -> Result<Vec<ResultWithPlayer>> {
    let sql = "
        SELECT r.id, r.event_id, r.player_id, p.name, r.position, r.points
        FROM results r
        JOIN players p ON r.player_id = p.id
        ORDER BY r.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_joined_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn list_for_event(conn: &Connection, event_id: i64) -> Result<Vec<ResultWithPlayer>> {
    let sql = "
        SELECT r.id, r.event_id, r.player_id, p.name, r.position, r.points
        FROM results r
        JOIN players p ON r.player_id = p.id
        WHERE r.event_id = ?1
        ORDER BY r.id
    ";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![event_id], parse_joined_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}
