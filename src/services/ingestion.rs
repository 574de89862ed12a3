use log::{debug, info};
use rusqlite::{Connection, TransactionBehavior};

use crate::database::results;
use crate::domain::{points_for, EventIdentity, RawRow};
use crate::errors::Result;
use crate::services::resolver::{resolve_event, resolve_player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub event_id: i64,
    pub event_created: bool,
    pub players_created: usize,
    pub results_created: usize,
}

/// Records one batch of finishing positions against an event.
///
/// The event and every player are found or created, and one result is stored
/// per row in the order given. Rows are stored even when the event already
/// existed, and a name listed twice produces two results. Everything happens in
/// a single transaction: an invalid row or a storage error leaves no trace of
/// the batch.
pub fn ingest(conn: &mut Connection, identity: &EventIdentity, rows: &[RawRow]) -> Result<IngestSummary> {
    info!(
        "Ingesting {} rows for '{}' on {}",
        rows.len(),
        identity.name,
        identity.date
    );

    // Take the write lock up front so concurrent batches serialize instead of
    // failing on lock upgrade.
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let event = resolve_event(&tx, &identity.name, identity.date)?;
    let event_created = event.was_created();
    let event = event.into_inner();
    if event_created {
        debug!("Created event {} ('{}')", event.id, event.name);
    }

    let mut players_created = 0;
    for (idx, raw) in rows.iter().enumerate() {
        let row = raw.validate(idx + 1)?;

        let player = resolve_player(&tx, &row.player_name)?;
        if player.was_created() {
            players_created += 1;
        }
        let player = player.into_inner();

        let points = points_for(row.position);
        results::insert_result(&tx, event.id, player.id, row.position, points)?;
        debug!(
            "  {} finished {} for {} points",
            player.name, row.position, points
        );
    }

    tx.commit()?;

    let summary = IngestSummary {
        event_id: event.id,
        event_created,
        players_created,
        results_created: rows.len(),
    };
    info!(
        "  → Stored {} results for event {} ({} new players)",
        summary.results_created, summary.event_id, summary.players_created
    );
    Ok(summary)
}

/// Transport entry point: validates the textual event identity, then ingests.
pub fn ingest_batch(
    conn: &mut Connection,
    event_name: &str,
    event_date: &str,
    rows: &[RawRow],
) -> Result<IngestSummary> {
    let identity = EventIdentity::parse(event_name, event_date)?;
    ingest(conn, &identity, rows)
}
