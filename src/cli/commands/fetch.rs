//! Fetch command implementation for the tide processor CLI
//!
//! This module contains the complete retrieval workflow: scraping the JMA
//! station listing, writing the station catalog, then downloading and
//! decoding each station's yearly tide text with bounded concurrency.

use super::shared::{self, ProcessingStats};
use crate::app::models::StationInfo;
use crate::app::services::archive_client::ArchiveClient;
use crate::app::services::json_writer;
use crate::app::services::station_catalog::StationCatalog;
use crate::app::services::tide_text_parser::TideTextParser;
use crate::cli::args::{FetchArgs, OutputFormat};
use crate::config::Config;
use crate::constants::{station_records_filename, station_text_filename};
use crate::{Error, Result};
use futures::stream::{self, StreamExt};
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Fetch command runner for the tide processor
///
/// This function orchestrates the entire retrieval workflow:
/// 1. Set up logging and configuration
/// 2. Scrape the station listing into a catalog and write it out
/// 3. Download and decode station text files with bounded concurrency
/// 4. Generate summary statistics
pub async fn run_fetch(args: FetchArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting JMA tide data fetch");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = shared::load_configuration(&args).await?;
    debug!("Loaded configuration: {:?}", config);

    // Scrape the station listing into a catalog
    let client = ArchiveClient::new(&config.fetch)?;
    info!("Fetching station listing from {}", config.fetch.station_list_url);
    let listing_html = client.fetch_station_listing().await?;
    let catalog = StationCatalog::from_listing_html(&listing_html)?;
    info!(
        "Found {} stations on the listing page",
        catalog.station_count()
    );

    // Restrict to requested stations where given
    let selected = select_stations(&catalog, &config.processing.stations)?;
    info!(
        "Processing {} stations for year {}",
        selected.len(),
        config.fetch.target_year
    );

    if config.processing.dry_run {
        return run_dry_run(&client, &catalog, &selected, &config);
    }

    config.ensure_output_directories()?;

    let mut stats = ProcessingStats {
        stations_listed: catalog.station_count(),
        ..Default::default()
    };

    // The catalog is written before any downloads so an interrupted run
    // still leaves a usable station list behind
    let stations_file = config.stations_file();
    json_writer::write_stations(&stations_file, &catalog.sorted_stations())?;
    info!("Station catalog written to {}", stations_file.display());
    stats.record_output(&stations_file);

    // Download and decode with bounded concurrency
    let parser = TideTextParser::new();
    let progress_bar = args
        .show_progress()
        .then(|| shared::create_progress_bar(selected.len() as u64, "Fetching stations"));

    let outcomes = {
        let client = &client;
        let parser = &parser;
        let config = &config;
        let progress_bar = progress_bar.as_ref();

        stream::iter(selected.iter())
            .map(|station| async move {
                let outcome = process_station(client, parser, config, &station.code).await;
                if let Some(pb) = progress_bar {
                    pb.inc(1);
                }
                (station.code.clone(), outcome)
            })
            .buffer_unordered(config.fetch.concurrent_downloads)
            .collect::<Vec<_>>()
            .await
    };

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Fetch complete");
    }

    for (code, outcome) in outcomes {
        stats.stations_processed += 1;

        match outcome {
            Ok(StationOutcome::Decoded {
                from_cache,
                records,
                skipped,
                output_file,
                output_bytes,
            }) => {
                if from_cache {
                    stats.stations_cached += 1;
                } else {
                    stats.stations_fetched += 1;
                }
                stats.records_decoded += records;
                stats.lines_skipped += skipped;
                stats.output_sizes.push((output_file, output_bytes));
            }
            Ok(StationOutcome::Missing) => {
                stats.stations_missing += 1;
            }
            Ok(StationOutcome::Empty { from_cache, skipped }) => {
                if from_cache {
                    stats.stations_cached += 1;
                } else {
                    stats.stations_fetched += 1;
                }
                stats.stations_empty += 1;
                stats.lines_skipped += skipped;
            }
            Err(e) => {
                error!("Failed to process station {}: {}", code, e);
                stats.errors_encountered += 1;
            }
        }
    }

    stats.processing_time = start_time.elapsed();

    // Generate final report
    generate_final_report(&args, &stats)?;

    Ok(stats)
}

/// Outcome of processing a single station
enum StationOutcome {
    /// Text retrieved and decoded into a record file
    Decoded {
        from_cache: bool,
        records: usize,
        skipped: usize,
        output_file: String,
        output_bytes: u64,
    },
    /// The archive has no text for this station and year
    Missing,
    /// Text retrieved but no line decoded into a record
    Empty { from_cache: bool, skipped: usize },
}

/// Download (or reuse) one station's tide text and decode it to JSON
async fn process_station(
    client: &ArchiveClient,
    parser: &TideTextParser,
    config: &Config,
    code: &str,
) -> Result<StationOutcome> {
    let text_filename = station_text_filename(code);
    let text_path = config.raw_text_dir().join(&text_filename);

    let (text, from_cache) = if !config.processing.force_refresh && text_path.exists() {
        debug!("Using cached tide text for station {}", code);
        let text = std::fs::read_to_string(&text_path).map_err(|e| {
            Error::io(
                format!("Failed to read cached tide text '{}'", text_path.display()),
                e,
            )
        })?;
        (text, true)
    } else {
        match client.fetch_station_text(code).await? {
            Some(text) => {
                std::fs::write(&text_path, &text).map_err(|e| {
                    Error::io(
                        format!("Failed to cache tide text '{}'", text_path.display()),
                        e,
                    )
                })?;
                (text, false)
            }
            None => return Ok(StationOutcome::Missing),
        }
    };

    let result = parser.parse_text(&text, &text_filename);

    if result.records.is_empty() {
        warn!("No tide records decoded for station {}", code);
        return Ok(StationOutcome::Empty {
            from_cache,
            skipped: result.stats.lines_skipped,
        });
    }

    let mut records = result.records;
    records.sort_by_key(|record| record.date);

    let records_filename = station_records_filename(code);
    let records_path = config.records_dir().join(&records_filename);
    json_writer::write_records(&records_path, &records)?;

    let output_bytes = std::fs::metadata(&records_path).map(|m| m.len()).unwrap_or(0);

    debug!(
        "Station {}: {} records, {} lines skipped",
        code,
        records.len(),
        result.stats.lines_skipped
    );

    Ok(StationOutcome::Decoded {
        from_cache,
        records: records.len(),
        skipped: result.stats.lines_skipped,
        output_file: records_filename,
        output_bytes,
    })
}

/// Restrict the catalog to the requested station codes, keeping catalog order
///
/// Codes not present on the listing page are skipped with a warning; an
/// empty selection is an error.
fn select_stations<'a>(
    catalog: &'a StationCatalog,
    requested: &[String],
) -> Result<Vec<&'a StationInfo>> {
    if requested.is_empty() {
        return Ok(catalog.sorted_stations());
    }

    let mut selected = Vec::new();
    for code in requested {
        match catalog.get(code) {
            Some(station) => selected.push(station),
            None => warn!("Station {} is not on the listing page, skipping", code),
        }
    }

    if selected.is_empty() {
        return Err(Error::station_catalog(
            "None of the requested stations appear on the listing page",
        ));
    }

    Ok(selected)
}

/// Perform a dry run showing what would be fetched
fn run_dry_run(
    client: &ArchiveClient,
    catalog: &StationCatalog,
    selected: &[&StationInfo],
    config: &Config,
) -> Result<ProcessingStats> {
    info!("Performing dry run - no files will be written");

    for station in selected {
        info!(
            "Would fetch {} ({}) from {}",
            station.code,
            station.name,
            client.station_text_url(&station.code)
        );
    }

    info!(
        "Dry run complete: {} stations would be fetched into {}",
        selected.len(),
        config.processing.output_path.display()
    );

    Ok(ProcessingStats {
        stations_listed: catalog.station_count(),
        stations_processed: selected.len(),
        ..Default::default()
    })
}

/// Generate final processing report
fn generate_final_report(args: &FetchArgs, stats: &ProcessingStats) -> Result<()> {
    info!("Generating final report");

    match args.output_format {
        OutputFormat::Human => generate_human_report(stats),
        OutputFormat::Json => generate_json_report(stats),
        OutputFormat::Csv => generate_csv_report(stats),
    }
}

/// Generate human-readable report
fn generate_human_report(stats: &ProcessingStats) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);
    let total_size = ProcessingStats::format_size(stats.total_output_size());

    println!("\n🌊 Tide Data Fetch Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Processing Summary:");
    println!("   • Stations listed: {}", stats.stations_listed);
    println!("   • Stations processed: {}", stats.stations_processed);
    println!("   • Downloaded from archive: {}", stats.stations_fetched);
    println!("   • Decoded from cache: {}", stats.stations_cached);
    println!("   • No data published: {}", stats.stations_missing);
    println!("   • No records decoded: {}", stats.stations_empty);
    println!("   • Records decoded: {}", stats.records_decoded);
    println!("   • Lines skipped: {}", stats.lines_skipped);
    println!("   • Total output size: {}", total_size);
    println!("   • Processing time: {}", duration);

    if stats.errors_encountered > 0 {
        println!("⚠️  Errors encountered: {}", stats.errors_encountered);
    }

    if !stats.output_sizes.is_empty() {
        println!("\n📁 Output Files:");
        for (filename, size) in stats.output_sizes.iter().take(10) {
            println!("   • {}: {}", filename, ProcessingStats::format_size(*size));
        }
        if stats.output_sizes.len() > 10 {
            println!("   • ... and {} more files", stats.output_sizes.len() - 10);
        }
    }

    println!();
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &ProcessingStats) -> Result<()> {
    let json_stats = serde_json::json!({
        "stations_listed": stats.stations_listed,
        "stations_processed": stats.stations_processed,
        "stations_fetched": stats.stations_fetched,
        "stations_cached": stats.stations_cached,
        "stations_missing": stats.stations_missing,
        "stations_empty": stats.stations_empty,
        "records_decoded": stats.records_decoded,
        "lines_skipped": stats.lines_skipped,
        "errors_encountered": stats.errors_encountered,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "total_output_size_bytes": stats.total_output_size(),
        "output_files": stats.output_sizes.iter().map(|(name, size)| {
            serde_json::json!({
                "filename": name,
                "size_bytes": size
            })
        }).collect::<Vec<_>>()
    });

    println!("{}", serde_json::to_string_pretty(&json_stats).unwrap());
    Ok(())
}

/// Generate CSV report for data analysis
fn generate_csv_report(stats: &ProcessingStats) -> Result<()> {
    println!("metric,value");
    println!("stations_listed,{}", stats.stations_listed);
    println!("stations_processed,{}", stats.stations_processed);
    println!("stations_fetched,{}", stats.stations_fetched);
    println!("stations_cached,{}", stats.stations_cached);
    println!("stations_missing,{}", stats.stations_missing);
    println!("stations_empty,{}", stats.stations_empty);
    println!("records_decoded,{}", stats.records_decoded);
    println!("lines_skipped,{}", stats.lines_skipped);
    println!("errors_encountered,{}", stats.errors_encountered);
    println!(
        "processing_time_seconds,{}",
        stats.processing_time.as_secs_f64()
    );
    println!("total_output_size_bytes,{}", stats.total_output_size());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_station(code: &str, name: &str, region: &str) -> StationInfo {
        StationInfo::new(code.to_string(), name.to_string(), region.to_string()).unwrap()
    }

    fn test_catalog() -> StationCatalog {
        let stations = vec![
            test_station("TK", "東京", "東京"),
            test_station("OS", "大阪", "大阪"),
            test_station("WN", "稚内", "北海道"),
        ];
        StationCatalog::from_stations(stations)
    }

    #[test]
    fn test_select_stations_defaults_to_all() {
        let catalog = test_catalog();
        let selected = select_stations(&catalog, &[]).unwrap();
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_select_stations_filters_to_requested() {
        let catalog = test_catalog();
        let requested = vec!["OS".to_string(), "TK".to_string()];
        let selected = select_stations(&catalog, &requested).unwrap();

        let codes: Vec<&str> = selected.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes, vec!["OS", "TK"]);
    }

    #[test]
    fn test_select_stations_skips_unknown_codes() {
        let catalog = test_catalog();
        let requested = vec!["TK".to_string(), "ZZ".to_string()];
        let selected = select_stations(&catalog, &requested).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].code, "TK");
    }

    #[test]
    fn test_select_stations_rejects_empty_selection() {
        let catalog = test_catalog();
        let requested = vec!["ZZ".to_string(), "Z9".to_string()];
        let result = select_stations(&catalog, &requested);
        assert!(matches!(result, Err(Error::StationCatalog { .. })));
    }

    #[test]
    fn test_generate_human_report() {
        let stats = ProcessingStats {
            stations_listed: 200,
            stations_processed: 3,
            stations_fetched: 2,
            stations_cached: 1,
            records_decoded: 1095,
            lines_skipped: 12,
            errors_encountered: 1,
            processing_time: std::time::Duration::from_secs(42),
            output_sizes: vec![("TK.json".to_string(), 1024)],
            ..Default::default()
        };

        // Should not panic
        let result = generate_human_report(&stats);
        assert!(result.is_ok());
    }

    #[test]
    fn test_generate_json_report() {
        let stats = ProcessingStats {
            stations_listed: 1,
            stations_processed: 1,
            stations_fetched: 1,
            records_decoded: 365,
            processing_time: std::time::Duration::from_secs(5),
            output_sizes: vec![("TK.json".to_string(), 2048)],
            ..Default::default()
        };

        // Should not panic
        let result = generate_json_report(&stats);
        assert!(result.is_ok());
    }

    #[test]
    fn test_generate_csv_report() {
        let stats = ProcessingStats {
            stations_listed: 2,
            stations_processed: 2,
            stations_missing: 1,
            processing_time: std::time::Duration::from_secs(3),
            ..Default::default()
        };

        // Should not panic
        let result = generate_csv_report(&stats);
        assert!(result.is_ok());
    }
}
