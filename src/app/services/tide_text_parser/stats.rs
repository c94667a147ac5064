//! Decoding statistics and result structures for tide text processing
//!
//! This module provides types for tracking decode success rates and
//! organizing parsed records for downstream processing.

use crate::app::models::TideRecord;

/// Parsing result with decoded records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully decoded tide records, in input order
    pub records: Vec<TideRecord>,

    /// Basic decoding statistics
    pub stats: ParseStats,
}

impl ParseResult {
    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}

/// Simple decoding statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of non-blank lines offered to the decoder
    pub total_lines: usize,

    /// Number of lines decoded into records
    pub records_decoded: usize,

    /// Number of non-blank lines the decoder rejected
    pub lines_skipped: usize,

    /// Number of blank lines (not offered to the decoder)
    pub blank_lines: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            records_decoded: 0,
            lines_skipped: 0,
            blank_lines: 0,
        }
    }

    /// Calculate decode success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.records_decoded as f64 / self.total_lines as f64) * 100.0
        }
    }

    /// Check if decoding was mostly successful (>90% success rate)
    ///
    /// Yearly files carry a handful of header lines, so even clean input
    /// never reaches exactly 100%.
    pub fn is_successful(&self) -> bool {
        self.success_rate() > 90.0
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Decoded {}/{} lines ({:.1}% success) | Skipped: {} | Blank: {}",
            self.records_decoded,
            self.total_lines,
            self.success_rate(),
            self.lines_skipped,
            self.blank_lines
        )
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
