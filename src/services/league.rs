use anyhow::Context;
use chrono::{Local, NaiveDate};

use crate::config::settings::DatabaseSettings;
use crate::database::{self, DbPool, Event, EventMetadata, ResultWithPlayer};
use crate::domain::RawRow;
use crate::errors::Result;
use crate::services::events::{self, EventDetail, EventListing};
use crate::services::ingestion::{self, IngestSummary};
use crate::services::standings::{self, Standing};

/// League operations over a connection pool. Each call checks out one
/// connection for its whole unit of work.
#[derive(Clone)]
pub struct LeagueService {
    pool: DbPool,
}

impl LeagueService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Opens the pool and makes sure the schema exists.
    pub fn open(settings: &DatabaseSettings) -> anyhow::Result<Self> {
        let pool = database::create_pool(settings)?;
        let conn = database::get_connection(&pool)?;
        database::setup::init_schema(&conn)
            .with_context(|| format!("Failed to prepare database at {}", settings.path))?;
        drop(conn);
        Ok(Self::new(pool))
    }

    pub fn ingest(&self, event_name: &str, event_date: &str, rows: &[RawRow]) -> Result<IngestSummary> {
        let mut conn = self.pool.get()?;
        ingestion::ingest_batch(&mut conn, event_name, event_date, rows)
    }

    pub fn create_event_admin(
        &self,
        name: &str,
        event_date: &str,
        metadata: EventMetadata,
    ) -> Result<Event> {
        let conn = self.pool.get()?;
        events::create_event_admin(&conn, name, event_date, metadata)
    }

    pub fn standings(&self) -> Result<Vec<Standing>> {
        let conn = self.pool.get()?;
        standings::compute_standings(&conn)
    }

    /// Upcoming and past events relative to the local calendar date.
    pub fn list_events(&self) -> Result<EventListing> {
        self.list_events_as_of(Local::now().date_naive())
    }

    pub fn list_events_as_of(&self, today: NaiveDate) -> Result<EventListing> {
        let conn = self.pool.get()?;
        events::list_events(&conn, today)
    }

    pub fn event_detail(&self, event_id: i64) -> Result<EventDetail> {
        let conn = self.pool.get()?;
        events::event_detail(&conn, event_id)
    }

    pub fn results_for_event(&self, event_id: i64) -> Result<Vec<ResultWithPlayer>> {
        let conn = self.pool.get()?;
        events::results_for_event(&conn, event_id)
    }
}
