//! Core tide text parser implementation
//!
//! This module wraps the pure line decoder with file reading, blank-line
//! filtering, and skip accounting.

use std::path::Path;
use tracing::{debug, info};

use super::line_decoder::decode_line;
use super::stats::{ParseResult, ParseStats};
use crate::{Error, Result};

/// Parser for one station's yearly tide text
///
/// The line decoder itself is pure and silent; this wrapper adds file
/// handling and per-line diagnostics so callers can judge how much of a
/// file was readable.
#[derive(Debug, Default)]
pub struct TideTextParser;

impl TideTextParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a text body and return records with statistics
    ///
    /// Records come back in input order; callers that persist them sort
    /// by date first.
    pub fn parse_text(&self, text: &str, source: &str) -> ParseResult {
        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        for (line_number, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                stats.blank_lines += 1;
                continue;
            }

            stats.total_lines += 1;
            match decode_line(line) {
                Some(record) => {
                    records.push(record);
                    stats.records_decoded += 1;
                }
                None => {
                    stats.lines_skipped += 1;
                    debug!("Skipped undecodable line {} in {}", line_number + 1, source);
                }
            }
        }

        debug!(
            "Decoded {}/{} lines from {} ({} blank)",
            stats.records_decoded, stats.total_lines, source, stats.blank_lines
        );

        ParseResult { records, stats }
    }

    /// Parse a tide text file and return records with statistics
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing tide text file: {}", path.display());

        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read tide text file '{}'", path.display()),
                e,
            )
        })?;

        let source = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let result = self.parse_text(&content, &source);

        info!("{}: {}", source, result.summary());

        Ok(result)
    }
}
