pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod report;
pub mod services;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::parse_results_csv;
use crate::services::server::ServerService;
use crate::services::LeagueService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_import(event_name: &str, event_date: &str, file: &Path) -> Result<()> {
    let league = open_league()?;
    let csv_file = std::fs::File::open(file)
        .with_context(|| format!("Failed to open {}", file.display()))?;
    let rows = parse_results_csv(csv_file)?;

    let summary = league.ingest(event_name, event_date, &rows)?;
    println!(
        "Stored {} results for event {} ({} new players)",
        summary.results_created, summary.event_id, summary.players_created
    );
    Ok(())
}

pub fn handle_standings() -> Result<()> {
    let league = open_league()?;
    report::print_standings(&league.standings()?);
    Ok(())
}

pub fn handle_events() -> Result<()> {
    let league = open_league()?;
    report::print_events(&league.list_events()?);
    Ok(())
}

fn open_league() -> Result<LeagueService> {
    let config = AppConfig::new();
    LeagueService::open(&config.database)
}
