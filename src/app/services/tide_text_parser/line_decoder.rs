//! Single-line decoding for JMA tide text
//!
//! A nominal line is 80 columns: 24 three-character hourly heights in
//! columns 0-71 (hours 0-23), then a metadata suffix of two-digit year,
//! month, and day plus the two-character station code. Published files
//! drift from that layout (shifted columns, short lines, fused digits),
//! so extraction is two-stage: fixed-offset slicing guarded by a numeric
//! check, then an end-anchored pattern search over the drifted line.
//!
//! Decoding failure is an expected outcome for header, blank, and
//! corrupted lines. The decoder returns `None` for those, performs no
//! I/O, and logs nothing; skip accounting belongs to the caller.

use super::field_parsers::{decode_height_chunk, hourly_chunk, is_numeric_field};
use crate::app::models::TideRecord;
use crate::constants::{
    CENTURY_BASE, HOURLY_FIELD_WIDTH, HOURS_PER_DAY, LINE_WIDTH, metadata_columns,
};
use chrono::NaiveDate;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static DRIFTED_METADATA_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Matches a date/station suffix that drifted off its fixed columns:
/// two-digit year, then month and day with whitespace separators, then
/// the station code, anchored at end of line
fn drifted_metadata_pattern() -> &'static Regex {
    DRIFTED_METADATA_PATTERN.get_or_init(|| {
        Regex::new(r"(\d{2})\s+(\d{1,2})\s+(\d{1,2})([A-Z0-9]{2})$")
            .expect("Invalid drifted metadata pattern")
    })
}

/// Metadata and hourly field split out of one line, before value decoding
struct RawFields<'a> {
    hourly: Cow<'a, str>,
    year: &'a str,
    month: &'a str,
    day: &'a str,
    station: &'a str,
}

/// Decode one line of JMA tide text into a [`TideRecord`]
///
/// Trailing newline characters are stripped and short lines are padded
/// before extraction. Lines that are not recoverable data lines yield
/// `None`: headers, blanks, lines whose metadata is unreadable through
/// both extraction stages, lines whose metadata does not form a real
/// calendar date or station code, and lines with no readable heights.
///
/// The decoder is pure: no I/O, no logging, and identical input always
/// yields identical output.
pub fn decode_line(raw: &str) -> Option<TideRecord> {
    let line = raw.trim_end_matches(['\r', '\n']);
    let padded = pad_to_line_width(line);

    let fields = extract_fixed(&padded).or_else(|| extract_drifted(line))?;

    let mut hourly = [None; HOURS_PER_DAY];
    for (hour, slot) in hourly.iter_mut().enumerate() {
        *slot = decode_height_chunk(hourly_chunk(fields.hourly.as_ref(), hour));
    }

    let date = resolve_date(fields.year, fields.month, fields.day)?;

    TideRecord::new(date, fields.station.to_string(), hourly).ok()
}

/// Right-pad short lines so the fixed-offset slices stay in bounds
fn pad_to_line_width(line: &str) -> Cow<'_, str> {
    if line.len() >= LINE_WIDTH {
        Cow::Borrowed(line)
    } else {
        Cow::Owned(format!("{:<width$}", line, width = LINE_WIDTH))
    }
}

/// Primary extraction: slice the metadata suffix at its fixed columns and
/// accept it only when year, month, and day are purely numeric
fn extract_fixed(padded: &str) -> Option<RawFields<'_>> {
    let year = padded.get(metadata_columns::YEAR)?.trim();
    let month = padded.get(metadata_columns::MONTH)?.trim();
    let day = padded.get(metadata_columns::DAY)?.trim();
    let station = padded.get(metadata_columns::STATION)?.trim();

    if !is_numeric_field(year) || !is_numeric_field(month) || !is_numeric_field(day) {
        return None;
    }

    Some(RawFields {
        hourly: Cow::Borrowed(padded.get(..HOURLY_FIELD_WIDTH)?),
        year,
        month,
        day,
        station,
    })
}

/// Fallback extraction: find the date/station suffix by pattern from the
/// end of the drifted line; everything before the match is the hourly
/// field, right-padded when shorter than its nominal width
fn extract_drifted(line: &str) -> Option<RawFields<'_>> {
    let caps = drifted_metadata_pattern().captures(line)?;
    let suffix_start = caps.get(0)?.start();

    let segment = line.get(..suffix_start)?;
    let hourly = if segment.len() >= HOURLY_FIELD_WIDTH {
        Cow::Borrowed(segment)
    } else {
        Cow::Owned(format!("{:<width$}", segment, width = HOURLY_FIELD_WIDTH))
    };

    Some(RawFields {
        hourly,
        year: caps.get(1)?.as_str(),
        month: caps.get(2)?.as_str(),
        day: caps.get(3)?.as_str(),
        station: caps.get(4)?.as_str(),
    })
}

/// Expand the two-digit year into the fixed century window and build the
/// date, rejecting impossible month/day combinations
fn resolve_date(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(CENTURY_BASE + year, month, day)
}
