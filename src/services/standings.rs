use std::collections::HashMap;

use rusqlite::Connection;

use crate::database::{results, ResultWithPlayer};
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub player_id: i64,
    pub player_name: String,
    pub total_points: i64,
    pub results_count: usize,
}

/// Season standings recomputed from every stored result.
pub fn compute_standings(conn: &Connection) -> Result<Vec<Standing>> {
    let all_results = results::list_all_with_players(conn)?;
    Ok(aggregate(&all_results))
}

/// Sums points per player. Highest total first; equal totals are ordered by
/// player name so the ranking never depends on storage order.
pub fn aggregate(results: &[ResultWithPlayer]) -> Vec<Standing> {
    let mut by_player: HashMap<i64, Standing> = HashMap::new();

    for result in results {
        let standing = by_player.entry(result.player_id).or_insert_with(|| Standing {
            player_id: result.player_id,
            player_name: result.player_name.clone(),
            total_points: 0,
            results_count: 0,
        });
        standing.total_points += result.points;
        standing.results_count += 1;
    }

    let mut standings: Vec<Standing> = by_player.into_values().collect();
    standings.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.player_name.cmp(&b.player_name))
    });
    standings
}
