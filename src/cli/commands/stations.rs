//! Stations command implementation for the tide processor CLI
//!
//! This module contains the station catalog reporting functionality: the
//! catalog is grouped by region in the archive's display order and written
//! out in human-readable, JSON, or CSV form.

use super::shared::{self, ProcessingStats};
use crate::app::services::archive_client::ArchiveClient;
use crate::app::services::json_writer;
use crate::app::services::station_catalog::StationCatalog;
use crate::cli::args::{OutputFormat, StationsArgs};
use crate::config::{Config, FetchConfig};
use crate::constants::STATIONS_OUTPUT_FILENAME;
use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

/// Stations command runner for the tide processor
///
/// Loads the station catalog from a previous fetch (or refreshes it from
/// the listing page) and generates a per-region report.
pub async fn run_stations(args: StationsArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    shared::setup_logging(args.get_log_level(), false)?;

    info!("Starting station catalog report");
    debug!("Stations arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let stations_file = stations_file_path(&args);

    let (catalog, source) = if args.refresh {
        info!("Refreshing station catalog from the listing page");
        let client = ArchiveClient::new(&FetchConfig::default())?;
        let listing_html = client.fetch_station_listing().await?;
        let catalog = StationCatalog::from_listing_html(&listing_html)?;

        // Keep the on-disk catalog in sync with what we report
        json_writer::write_stations(&stations_file, &catalog.sorted_stations())?;
        info!("Refreshed catalog written to {}", stations_file.display());

        (catalog, "listing page (refreshed)".to_string())
    } else {
        info!("Loading station catalog from {}", stations_file.display());
        let stations = json_writer::read_stations(&stations_file).map_err(|e| match e {
            Error::FileNotFound { .. } => Error::configuration(format!(
                "Station catalog not found at {} (run `fetch` first, or pass --refresh)",
                stations_file.display()
            )),
            other => other,
        })?;
        let catalog = StationCatalog::from_stations(stations);
        (catalog, stations_file.display().to_string())
    };

    info!("Catalog contains {} stations", catalog.station_count());

    // Generate report
    generate_station_report(&args, &catalog, &source)?;

    let stats = ProcessingStats {
        stations_listed: catalog.station_count(),
        stations_processed: catalog.station_count(),
        processing_time: start_time.elapsed(),
        output_sizes: match &args.output_file {
            Some(output_file) => match std::fs::metadata(output_file) {
                Ok(metadata) => vec![(output_file.display().to_string(), metadata.len())],
                Err(_) => Vec::new(),
            },
            None => Vec::new(),
        },
        ..Default::default()
    };

    info!(
        "Station report completed in {:.2}s",
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// Where the station catalog lives for this invocation
fn stations_file_path(args: &StationsArgs) -> PathBuf {
    match &args.data_path {
        Some(path) => path.join(STATIONS_OUTPUT_FILENAME),
        None => Config::default().stations_file(),
    }
}

/// Generate the station catalog report based on output format
fn generate_station_report(
    args: &StationsArgs,
    catalog: &StationCatalog,
    source: &str,
) -> Result<()> {
    let content = match args.output_format {
        OutputFormat::Human => build_human_report(catalog, source),
        OutputFormat::Json => build_json_report(catalog, source)?,
        OutputFormat::Csv => build_csv_report(catalog),
    };

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &content).map_err(|e| {
                Error::io(
                    format!("Failed to write report to '{}'", path.display()),
                    e,
                )
            })?;
            info!("Station report written to {}", path.display());
        }
        None => {
            println!("{}", content);
        }
    }

    Ok(())
}

/// Build the human-readable per-region report
fn build_human_report(catalog: &StationCatalog, source: &str) -> String {
    let grouped = catalog.grouped_by_region();

    let mut output = format!(
        "📊 JMA Tide Station Catalog\n\
         ===========================\n\
         📁 Source: {}\n\
         🌊 Total stations: {} across {} regions\n\
         \n",
        source,
        catalog.station_count(),
        grouped.len()
    );

    for (region, stations) in &grouped {
        output.push_str(&format!("{} ({} stations)\n", region, stations.len()));
        for station in stations {
            output.push_str(&format!("   • {} ({})\n", station.name, station.code));
        }
        output.push('\n');
    }

    if catalog.is_empty() {
        output.push_str("No stations in catalog.\n");
    }

    output
}

/// Build the JSON report for machine consumption
fn build_json_report(catalog: &StationCatalog, source: &str) -> Result<String> {
    use serde_json::json;

    let grouped = catalog.grouped_by_region();

    let json_regions: Vec<_> = grouped
        .iter()
        .map(|(region, stations)| {
            json!({
                "region": region,
                "station_count": stations.len(),
                "stations": stations.iter().map(|station| {
                    json!({
                        "code": station.code,
                        "name": station.name,
                    })
                }).collect::<Vec<_>>()
            })
        })
        .collect();

    let json_report = json!({
        "metadata": {
            "source": source,
            "total_stations": catalog.station_count(),
            "region_count": grouped.len(),
            "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
        },
        "regions": json_regions
    });

    serde_json::to_string_pretty(&json_report)
        .map_err(|e| Error::serialization("Failed to serialize station report", e))
}

/// Build the CSV report, one station per row in display order
fn build_csv_report(catalog: &StationCatalog) -> String {
    let mut csv = String::from("code,name,region\n");

    for (region, stations) in catalog.grouped_by_region() {
        for station in stations {
            csv.push_str(&format!(
                "{},{},{}\n",
                station.code,
                csv_escape(&station.name),
                csv_escape(&region)
            ));
        }
    }

    csv
}

/// Escape CSV field values
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
