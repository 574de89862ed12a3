pub mod events;
pub mod ingestion;
pub mod league;
pub mod resolver;
pub mod server;
pub mod standings;

pub use league::LeagueService;
