use anyhow::Result;

use league_standings::cli::Command;
use league_standings::{handle_events, handle_import, handle_serve, handle_standings, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Import {
            event_name,
            event_date,
            file,
        } => handle_import(event_name, event_date, file),
        Command::Standings => handle_standings(),
        Command::Events => handle_events(),
    }
}
