//! Command implementations for the JMA tide processor CLI
//!
//! This module contains the implementation of all CLI commands, organized into
//! separate modules for better maintainability:
//!
//! - `fetch`: Scrape the station listing, download yearly tide text, decode records
//! - `decode`: Decode already-downloaded tide text files offline
//! - `stations`: Station catalog reporting in various output formats
//! - `shared`: Common types and utilities used across commands

pub mod decode;
pub mod fetch;
pub mod shared;
pub mod stations;

// Re-export the shared statistics type used by every command runner
pub use shared::ProcessingStats;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for the tide processor
///
/// Dispatches to the appropriate command implementation based on
/// the parsed command line arguments.
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Fetch(fetch_args) => fetch::run_fetch(fetch_args).await,
        Commands::Decode(decode_args) => decode::run_decode(decode_args).await,
        Commands::Stations(stations_args) => stations::run_stations(stations_args).await,
    }
}
