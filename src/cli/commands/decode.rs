//! Decode command implementation for the tide processor CLI
//!
//! Decodes already-downloaded tide text files into JSON record files
//! without touching the network. Accepts either a single text file or a
//! directory tree to scan for `.txt` files.

use super::shared::{self, ProcessingStats};
use crate::app::services::json_writer;
use crate::app::services::tide_text_parser::TideTextParser;
use crate::cli::args::DecodeArgs;
use crate::constants::TEXT_FILE_EXTENSION;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Decode command runner for the tide processor
pub async fn run_decode(args: DecodeArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    shared::setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting offline tide text decode");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let mut stats = ProcessingStats::default();

    if args.input_path.is_dir() {
        decode_directory(&args, &mut stats)?;
    } else {
        decode_single_file(&args, &mut stats)?;
    }

    stats.processing_time = start_time.elapsed();

    if !args.quiet {
        println!(
            "\nDecoded {} records from {} file(s) ({} lines skipped)",
            stats.records_decoded, stats.stations_processed, stats.lines_skipped
        );
        if stats.has_errors() {
            println!("⚠️  {} file(s) failed to decode", stats.errors_encountered);
        }
    }

    Ok(stats)
}

/// Decode one explicitly named text file
///
/// Unlike directory mode, a file that yields no records is an error: the
/// caller named it directly, so silence would hide an input mistake.
fn decode_single_file(args: &DecodeArgs, stats: &mut ProcessingStats) -> Result<()> {
    let parser = TideTextParser::new();
    let input = &args.input_path;

    let result = parser.parse_file(input)?;
    stats.stations_listed = 1;
    stats.stations_processed += 1;
    stats.lines_skipped += result.stats.lines_skipped;

    if result.records.is_empty() {
        return Err(Error::tide_format(
            input.display().to_string(),
            "no tide records found in file",
        ));
    }

    let mut records = result.records;
    records.sort_by_key(|record| record.date);

    let output = match &args.output {
        Some(path) if path.is_dir() => path.join(json_filename_for(input)),
        Some(path) => path.clone(),
        None => input.with_extension("json"),
    };
    json_writer::write_records(&output, &records)?;

    stats.records_decoded += records.len();
    stats.record_output(&output);

    info!(
        "Decoded {} records from {} to {}",
        records.len(),
        input.display(),
        output.display()
    );

    Ok(())
}

/// Decode every text file found under a directory tree
///
/// Individual file failures are logged and counted rather than aborting
/// the batch.
fn decode_directory(args: &DecodeArgs, stats: &mut ProcessingStats) -> Result<()> {
    let parser = TideTextParser::new();
    let text_files = discover_text_files(&args.input_path)?;

    if text_files.is_empty() {
        warn!("No .txt files found under {}", args.input_path.display());
        return Ok(());
    }

    stats.stations_listed = text_files.len();
    info!(
        "Decoding {} text files under {}",
        text_files.len(),
        args.input_path.display()
    );

    let progress_bar = args
        .show_progress()
        .then(|| shared::create_progress_bar(text_files.len() as u64, "Decoding files"));

    for path in &text_files {
        stats.stations_processed += 1;

        match parser.parse_file(path) {
            Ok(result) => {
                stats.lines_skipped += result.stats.lines_skipped;

                if result.records.is_empty() {
                    warn!("No tide records in {}", path.display());
                    stats.stations_empty += 1;
                } else {
                    let mut records = result.records;
                    records.sort_by_key(|record| record.date);

                    let output = output_path_for(path, args.output.as_deref());
                    match json_writer::write_records(&output, &records) {
                        Ok(()) => {
                            stats.records_decoded += records.len();
                            stats.record_output(&output);
                        }
                        Err(e) => {
                            error!("Failed to write records for {}: {}", path.display(), e);
                            stats.errors_encountered += 1;
                        }
                    }
                }
            }
            Err(e) => {
                error!("Failed to decode {}: {}", path.display(), e);
                stats.errors_encountered += 1;
            }
        }

        if let Some(pb) = &progress_bar {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message("Decode complete");
    }

    Ok(())
}

/// Recursively discover text files under a directory
fn discover_text_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut text_files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("Failed to walk '{}'", root.display()), e)
        })?;

        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(TEXT_FILE_EXTENSION)
        {
            text_files.push(path.to_path_buf());
        }
    }

    text_files.sort();
    debug!(
        "Discovered {} text files under {}",
        text_files.len(),
        root.display()
    );

    Ok(text_files)
}

/// Where the JSON for a decoded text file goes
///
/// With `--output` the file lands in that directory under its own stem;
/// otherwise it is written next to the input with a `.json` extension.
fn output_path_for(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(json_filename_for(input)),
        None => input.with_extension("json"),
    }
}

fn json_filename_for(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "records".to_string());
    format!("{}.json", stem)
}
