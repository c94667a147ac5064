//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::cli::args::FetchArgs;
use crate::config::Config;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, info};

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of stations found on the listing page (or input files discovered)
    pub stations_listed: usize,
    /// Number of stations (or files) attempted
    pub stations_processed: usize,
    /// Number of stations downloaded from the archive
    pub stations_fetched: usize,
    /// Number of stations decoded from the local text cache
    pub stations_cached: usize,
    /// Number of stations with no published text for the target year
    pub stations_missing: usize,
    /// Number of stations (or files) whose text yielded no records
    pub stations_empty: usize,
    /// Number of tide records decoded
    pub records_decoded: usize,
    /// Number of non-blank lines the decoder rejected
    pub lines_skipped: usize,
    /// Number of errors encountered
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
    /// Output file sizes in bytes
    pub output_sizes: Vec<(String, u64)>,
}

impl ProcessingStats {
    /// Calculate total output size in bytes
    pub fn total_output_size(&self) -> u64 {
        self.output_sizes.iter().map(|(_, size)| size).sum()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }

    /// Whether any errors were recorded during the run
    pub fn has_errors(&self) -> bool {
        self.errors_encountered > 0
    }

    /// Record the size of a written output file under its file name
    pub fn record_output(&mut self, path: &Path) {
        let bytes = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        self.output_sizes.push((name, bytes));
    }
}

/// Set up structured logging to stderr
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("jma_tide_processor={}", log_level)));

    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration with layered approach (defaults, config file, CLI overrides)
pub async fn load_configuration(args: &FetchArgs) -> Result<Config> {
    info!("Loading configuration");

    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file found, using defaults");
    }

    let mut config = Config::load_layered(args.output_path.clone(), config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides on top of the loaded configuration
///
/// Flags always win; optional values override only when given on the
/// command line, so config-file settings survive a plain `fetch`.
pub fn apply_cli_overrides(config: &mut Config, args: &FetchArgs) {
    if let Some(stations) = args.get_stations() {
        config.processing.stations = stations;
    }

    config.processing.dry_run = args.dry_run;
    config.processing.force_refresh = args.force;

    if let Some(year) = args.year {
        config.fetch.target_year = year;
    }

    if let Some(concurrency) = args.concurrency {
        config.fetch.concurrent_downloads = concurrency;
    }

    config.logging.level = args.get_log_level().to_string();
}

/// Create a progress bar with consistent styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
