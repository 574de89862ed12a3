use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "league standings backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Record an event's results from a CSV file with player and position columns
    Import {
        /// Event name
        #[arg(long)]
        event_name: String,
        /// Event date as YYYY-MM-DD
        #[arg(long)]
        event_date: String,
        /// Path to the results CSV
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Print the current standings
    Standings,
    /// Print upcoming and past events
    Events,
}
