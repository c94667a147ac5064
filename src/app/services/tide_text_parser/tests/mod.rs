//! Test utilities and fixtures for tide text parser testing
//!
//! This module provides shared line builders and sample bodies used
//! across the test modules.

use crate::app::models::TideRecord;
use crate::constants::HOURS_PER_DAY;
use chrono::{Datelike, NaiveDate};
use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;
mod stats_tests;

/// A clean 80-column line: 24 ascending heights, 2026-03-05, station TK
pub const WELL_FORMED_LINE: &str =
    "105108112116120125130136142148154160166172178184190196202208214220226232260305TK";

/// Hourly values encoded in [`WELL_FORMED_LINE`]
pub const WELL_FORMED_HEIGHTS: [i16; HOURS_PER_DAY] = [
    105, 108, 112, 116, 120, 125, 130, 136, 142, 148, 154, 160, 166, 172, 178, 184, 190, 196, 202,
    208, 214, 220, 226, 232,
];

/// Encode hourly heights as 24 right-justified 3-character fields
pub fn encode_hourly(heights: &[Option<i16>; HOURS_PER_DAY]) -> String {
    heights
        .iter()
        .map(|h| match h {
            Some(v) => format!("{:>3}", v),
            None => "   ".to_string(),
        })
        .collect()
}

/// Encode a record back into its 80-column line form
pub fn encode_line(record: &TideRecord) -> String {
    format!(
        "{}{:02}{:02}{:02}{}",
        encode_hourly(&record.hourly),
        record.date.year() % 100,
        record.date.month(),
        record.date.day(),
        record.station
    )
}

/// Build a well-formed record for the given March 2026 day
pub fn sample_record(day: u32) -> TideRecord {
    let mut hourly = [None; HOURS_PER_DAY];
    for (hour, slot) in hourly.iter_mut().enumerate() {
        *slot = Some(100 + day as i16 + hour as i16);
    }
    TideRecord {
        date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
        station: "TK".to_string(),
        hourly,
    }
}

/// A yearly-file body: banner text, a blank line, data lines, and junk
pub fn create_test_body() -> String {
    let mut body = String::new();
    body.push_str("JMA ANNUAL TIDE TABLE 2026 (TOKYO)\n");
    body.push('\n');
    for day in 1..=3 {
        body.push_str(&encode_line(&sample_record(day)));
        body.push('\n');
    }
    body.push_str("-- end of listing --\n");
    body
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
