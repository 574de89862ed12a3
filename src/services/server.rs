use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{create_router, AppState};
use crate::config::settings::AppConfig;
use crate::services::LeagueService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        info!("Using database at {}", self.config.database.path);
        let league = LeagueService::open(&self.config.database)?;

        let state = Arc::new(AppState { league });

        let app = create_router(state)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        let addr = SocketAddr::from((self.config.server.bind_address, self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
