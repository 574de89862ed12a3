use crate::api::error::ApiError;
use crate::services::LeagueService;

pub mod admin;
pub mod events;
pub mod standings;

pub struct AppState {
    pub league: LeagueService,
}

pub async fn health() -> &'static str {
    "ok"
}

/// Runs a storage-bound closure off the async executor.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> crate::errors::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}
