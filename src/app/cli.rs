use std::{net::SocketAddr, path::PathBuf};

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "stock-watchlist", version, about = "Track a watchlist of stock symbols")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a symbol to the watchlist
    Add { symbol: String },
    /// Remove a symbol from the watchlist
    Remove { symbol: String },
    /// Print the watchlist
    List,
    /// Fetch quotes for every symbol and print them as a table
    Show,
    /// Fetch quotes for every symbol and write them to a CSV file
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Serve the watchlist and quotes over HTTP
    Serve {
        #[arg(short, long)]
        listen: Option<SocketAddr>,
    },
}

impl Command {
    /// Batch commands refuse to start without a credential; the server reports it per request.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Command::Serve { .. })
    }

    pub fn default_log_level(&self) -> &'static str {
        match self {
            Command::Serve { .. } => "info",
            _ => "warn",
        }
    }
}
