//! Field parsing utilities for tide text lines
//!
//! This module provides helper functions for decoding individual hourly
//! height chunks and validating metadata suffix fields.

use crate::constants::HOURLY_CHUNK_WIDTH;
use regex::Regex;
use std::sync::OnceLock;

static EMBEDDED_NUMBER_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Matches the first signed integer inside a chunk whose digits are fused
/// with stray characters
fn embedded_number_pattern() -> &'static Regex {
    EMBEDDED_NUMBER_PATTERN
        .get_or_init(|| Regex::new(r"-?\d+").expect("Invalid embedded number pattern"))
}

/// Check that a trimmed metadata field is non-empty and purely numeric
pub fn is_numeric_field(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

/// Extract the chunk for one hour from the hourly field
///
/// Chunks past the end of a short field come back empty instead of
/// panicking, so the caller sees them as missing heights.
pub fn hourly_chunk(field: &str, hour: usize) -> &str {
    let start = hour * HOURLY_CHUNK_WIDTH;
    if start >= field.len() {
        return "";
    }
    let end = (start + HOURLY_CHUNK_WIDTH).min(field.len());
    field.get(start..end).unwrap_or("")
}

/// Decode one hourly chunk into a height in centimeters
///
/// Empty chunks are missing heights. Unparsable chunks get one salvage
/// attempt: the first signed integer embedded in the chunk, if any.
pub fn decode_height_chunk(chunk: &str) -> Option<i16> {
    let trimmed = chunk.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(height) = trimmed.parse::<i16>() {
        return Some(height);
    }

    embedded_number_pattern()
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<i16>().ok())
}
