//! Parser for JMA fixed-width tide table text
//!
//! This module decodes the yearly per-station tide text published by the
//! JMA archive: one line per day, 24 three-character hourly heights
//! followed by a compact date/station suffix. Published files drift from
//! the nominal layout often enough that decoding needs a recovery path,
//! so malformed lines are skipped rather than treated as errors.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`line_decoder`] - Pure single-line decoding with fallback recovery
//! - [`field_parsers`] - Utility functions for chunk and metadata parsing
//! - [`parser`] - File and text body orchestration
//! - [`stats`] - Decoding statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use jma_tide_processor::app::services::tide_text_parser::decode_line;
//!
//! let line = "105108112116120125130136142148154160166172178184190196202208214220226232260305TK";
//! let record = decode_line(line).expect("well-formed line");
//!
//! assert_eq!(record.station, "TK");
//! assert_eq!(record.height_at(0), Some(105));
//! ```

pub mod field_parsers;
pub mod line_decoder;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_decoder::decode_line;
pub use parser::TideTextParser;
pub use stats::{ParseResult, ParseStats};
