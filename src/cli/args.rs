//! Command-line argument definitions for the JMA tide processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Each subcommand owns its argument struct and validation.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the JMA tide processor
///
/// Converts Japan Meteorological Agency hourly tide predictions from
/// 80-column fixed-width text into JSON record arrays, one file per
/// station, plus a station catalog grouped by prefecture.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "jma-tide-processor",
    version,
    about = "Convert JMA hourly tide tables from fixed-width text to JSON",
    long_about = "Downloads the Japan Meteorological Agency station listing and yearly tide \
                  prediction text, decodes the 80-column hourly tables (with fallback recovery \
                  for shifted lines), and writes date-sorted JSON record arrays per station \
                  alongside a prefecture-grouped station catalog."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the tide processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch the station catalog and yearly tide text, then decode to JSON
    Fetch(FetchArgs),
    /// Decode already-downloaded tide text without touching the network
    Decode(DecodeArgs),
    /// Report on the station catalog
    Stations(StationsArgs),
}

/// Arguments for the fetch command (full download and decode pipeline)
#[derive(Debug, Clone, Parser)]
pub struct FetchArgs {
    /// Output directory for downloaded text, record arrays, and the catalog
    ///
    /// Raw text is cached under raw_txt/, decoded records land under raw/,
    /// and the catalog is written as stations.json. Created if missing.
    /// If not specified, defaults to ./data
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output directory for downloaded and decoded data"
    )]
    pub output_path: Option<PathBuf>,

    /// Specific stations to fetch (comma-separated two-character codes)
    ///
    /// If not specified, every station on the listing page is fetched.
    /// Codes are case-insensitive; unknown codes are skipped with a warning.
    #[arg(
        short = 's',
        long = "stations",
        value_name = "LIST",
        help = "Comma-separated station codes to fetch (e.g. TK,OS,NG)"
    )]
    pub stations: Option<StationList>,

    /// Target year for the yearly tide text
    ///
    /// The archive publishes one text file per station per year. If not
    /// specified, uses the configured year (2026 by default).
    #[arg(long = "year", value_name = "YEAR", help = "Target year to download")]
    pub year: Option<i32>,

    /// Number of concurrent station downloads
    #[arg(
        short = 'j',
        long = "concurrency",
        value_name = "COUNT",
        help = "Number of concurrent station downloads"
    )]
    pub concurrency: Option<usize>,

    /// Re-download tide text even when a cached copy exists
    ///
    /// By default, stations with a cached raw_txt/ file are decoded from
    /// the cache instead of being fetched again.
    #[arg(long = "force", help = "Re-download tide text, ignoring the cache")]
    pub force: bool,

    /// Perform a dry run without downloading tide text
    ///
    /// Fetches the station listing and shows what would be downloaded,
    /// but writes no files.
    #[arg(
        long = "dry-run",
        help = "Show what would be downloaded without writing files"
    )]
    pub dry_run: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for endpoint and timeout settings. If not
    /// specified, looks for ~/.config/jma-tide-processor/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the fetch summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the fetch summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the decode command (offline text to JSON conversion)
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Tide text file or directory of .txt files to decode
    ///
    /// A directory is walked recursively; every .txt file found is
    /// decoded into a record array named after its file stem.
    #[arg(value_name = "PATH", help = "Tide text file or directory to decode")]
    pub input_path: PathBuf,

    /// Output file (for a single input file) or directory (for a directory)
    ///
    /// If not specified, each record array is written next to its input
    /// with the extension changed to .json
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output file or directory for decoded records"
    )]
    pub output: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the stations command (catalog reports)
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// Data directory containing stations.json
    ///
    /// If not specified, defaults to ./data
    #[arg(
        short = 'd',
        long = "data",
        value_name = "PATH",
        help = "Data directory containing stations.json"
    )]
    pub data_path: Option<PathBuf>,

    /// Re-scrape the station listing instead of reading stations.json
    ///
    /// The refreshed catalog is written back to stations.json.
    #[arg(long = "refresh", help = "Re-scrape the station listing page")]
    pub refresh: bool,

    /// Output format for the station report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the station report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the station report
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the station report"
    )]
    pub output_file: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Wrapper for parsing comma-separated station code lists
#[derive(Debug, Clone)]
pub struct StationList {
    pub codes: Vec<String>,
}

impl FromStr for StationList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let codes: Vec<String> = s
            .split(',')
            .map(|s| s.trim().to_ascii_uppercase())
            .filter(|s| !s.is_empty())
            .collect();

        if codes.is_empty() {
            return Err(Error::data_validation(
                "Station list cannot be empty".to_string(),
            ));
        }

        // Any well-formed code is accepted; whether the archive knows it
        // is decided against the listing page at fetch time
        for code in &codes {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(Error::data_validation(format!(
                    "Invalid station code '{}': expected 2 alphanumeric characters (e.g. TK, OS)",
                    code
                )));
            }
        }

        Ok(StationList { codes })
    }
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl FetchArgs {
    /// Validate the fetch command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // The century window only covers two-digit years from 2000
        if let Some(year) = self.year {
            if !(2000..=2099).contains(&year) {
                return Err(Error::configuration(format!(
                    "Target year {} is outside the supported range 2000-2099",
                    year
                )));
            }
        }

        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err(Error::configuration(
                    "Concurrency must be greater than 0".to_string(),
                ));
            }

            if concurrency > 32 {
                return Err(Error::configuration(
                    "Concurrency cannot exceed 32".to_string(),
                ));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Get the station codes to fetch, if a filter was given
    pub fn get_stations(&self) -> Option<Vec<String>> {
        self.stations.as_ref().map(|list| list.codes.clone())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for FetchArgs {
    fn default() -> Self {
        Self {
            output_path: None,
            stations: None,
            year: None,
            concurrency: None,
            force: false,
            dry_run: false,
            config_file: None,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}

impl DecodeArgs {
    /// Validate the decode command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::configuration(format!(
                "Input path does not exist: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl StationsArgs {
    /// Validate the stations command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate output file directory exists if specified
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if parent != std::path::Path::new("") && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
