//! Data models for tide processing
//!
//! This module contains the core data structures for representing decoded
//! tide-table records and station catalog entries, following the layout of
//! the JMA annual tide table publication.

use crate::constants::{HOURS_PER_DAY, PLACEHOLDER_STATION_NAME, UNCLASSIFIED_REGION};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Tide Record Structure
// =============================================================================

/// One decoded tide line: a station's hourly heights for a single day
///
/// Heights are astronomical tide predictions in centimeters above the
/// station datum. A slot that could not be read from the source line is
/// `None`; a record with all 24 slots missing is never produced.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TideRecord {
    /// Calendar date the hourly values cover
    pub date: NaiveDate,

    /// Two-character uppercase station code (e.g. "TK")
    pub station: String,

    /// Tide heights in centimeters for hours 0-23, in order
    pub hourly: [Option<i16>; HOURS_PER_DAY],
}

impl TideRecord {
    /// Create a new tide record with validation
    pub fn new(date: NaiveDate, station: String, hourly: [Option<i16>; HOURS_PER_DAY]) -> Result<Self> {
        let record = Self {
            date,
            station,
            hourly,
        };

        record.validate()?;
        Ok(record)
    }

    /// Validate record data for consistency
    pub fn validate(&self) -> Result<()> {
        if self.station.len() != 2 || !self.station.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::data_validation(format!(
                "Invalid station code '{}': expected 2 alphanumeric characters",
                self.station
            )));
        }

        if self.station.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(Error::data_validation(format!(
                "Invalid station code '{}': must be uppercase",
                self.station
            )));
        }

        // A line with zero readable heights is noise, not a record
        if self.hourly.iter().all(Option::is_none) {
            return Err(Error::data_validation(format!(
                "Record {}/{} has no hourly data",
                self.station, self.date
            )));
        }

        Ok(())
    }

    /// Height for an hour of day, if present
    pub fn height_at(&self, hour: usize) -> Option<i16> {
        self.hourly.get(hour).copied().flatten()
    }

    /// Number of hours without a readable height
    pub fn missing_hours(&self) -> usize {
        self.hourly.iter().filter(|h| h.is_none()).count()
    }

    /// Highest tide of the day across readable hours
    pub fn max_height(&self) -> Option<i16> {
        self.hourly.iter().flatten().max().copied()
    }

    /// Lowest tide of the day across readable hours
    pub fn min_height(&self) -> Option<i16> {
        self.hourly.iter().flatten().min().copied()
    }
}

// =============================================================================
// Station Catalog Entry Structure
// =============================================================================

/// One station from the JMA listing page, enriched with its region
///
/// The region is a prefecture label from the curated lookup table, or the
/// unclassified sentinel for codes the table does not cover. Entries are
/// immutable once built; de-duplication and ordering happen in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StationInfo {
    /// Two-character uppercase station code
    pub code: String,

    /// Display name from the listing page (e.g. "東京", "稚内")
    pub name: String,

    /// Prefecture label, or the unclassified sentinel
    pub region: String,
}

impl StationInfo {
    /// Create a new station entry with validation
    pub fn new(code: String, name: String, region: String) -> Result<Self> {
        let station = Self { code, name, region };

        station.validate()?;
        Ok(station)
    }

    /// Validate station entry data
    pub fn validate(&self) -> Result<()> {
        if self.code.len() != 2 || !self.code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::data_validation(format!(
                "Invalid station code '{}': expected 2 alphanumeric characters",
                self.code
            )));
        }

        if self.code.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(Error::data_validation(format!(
                "Invalid station code '{}': must be uppercase",
                self.code
            )));
        }

        if self.name.trim().is_empty() {
            return Err(Error::data_validation(
                "Station name cannot be empty".to_string(),
            ));
        }

        if self.name == PLACEHOLDER_STATION_NAME {
            return Err(Error::data_validation(format!(
                "Station name '{}' is the listing placeholder, not a real name",
                self.name
            )));
        }

        if self.region.trim().is_empty() {
            return Err(Error::data_validation(
                "Region cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether the region came from the curated table rather than the sentinel
    pub fn is_classified(&self) -> bool {
        self.region != UNCLASSIFIED_REGION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test data helpers
    fn create_test_hourly() -> [Option<i16>; HOURS_PER_DAY] {
        let mut hourly = [None; HOURS_PER_DAY];
        for (hour, slot) in hourly.iter_mut().enumerate() {
            *slot = Some(100 + hour as i16);
        }
        hourly
    }

    fn create_test_record() -> TideRecord {
        TideRecord {
            date: NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            station: "TK".to_string(),
            hourly: create_test_hourly(),
        }
    }

    fn create_test_station_info() -> StationInfo {
        StationInfo {
            code: "TK".to_string(),
            name: "東京".to_string(),
            region: "東京".to_string(),
        }
    }

    mod tide_record_tests {
        use super::*;

        #[test]
        fn test_record_creation_valid() {
            let record = create_test_record();
            assert!(record.validate().is_ok());
            assert_eq!(record.station, "TK");
            assert_eq!(record.hourly.len(), 24);
        }

        #[test]
        fn test_record_station_code_validation() {
            let mut record = create_test_record();

            record.station = "TKY".to_string();
            assert!(record.validate().is_err());

            record.station = "T".to_string();
            assert!(record.validate().is_err());

            record.station = "tk".to_string();
            assert!(record.validate().is_err());

            record.station = "T!".to_string();
            assert!(record.validate().is_err());

            // Digits are legal code characters (e.g. "Q8")
            record.station = "Q8".to_string();
            assert!(record.validate().is_ok());
        }

        #[test]
        fn test_record_rejects_all_missing_hours() {
            let mut record = create_test_record();
            record.hourly = [None; HOURS_PER_DAY];
            assert!(record.validate().is_err());

            // A single readable hour is enough
            record.hourly[7] = Some(42);
            assert!(record.validate().is_ok());
        }

        #[test]
        fn test_record_height_access() {
            let mut record = create_test_record();
            record.hourly[3] = None;

            assert_eq!(record.height_at(0), Some(100));
            assert_eq!(record.height_at(3), None);
            assert_eq!(record.height_at(23), Some(123));
            // Out of range hours are None, not a panic
            assert_eq!(record.height_at(24), None);
        }

        #[test]
        fn test_record_statistics() {
            let mut record = create_test_record();
            record.hourly[0] = Some(-15);
            record.hourly[5] = None;
            record.hourly[6] = None;

            assert_eq!(record.missing_hours(), 2);
            assert_eq!(record.min_height(), Some(-15));
            assert_eq!(record.max_height(), Some(123));
        }

        #[test]
        fn test_record_serde_shape() {
            let mut record = create_test_record();
            record.hourly[1] = None;

            let json = serde_json::to_value(&record).unwrap();
            assert_eq!(json["date"], "2026-03-05");
            assert_eq!(json["station"], "TK");
            assert_eq!(json["hourly"][0], 100);
            assert!(json["hourly"][1].is_null());
            assert_eq!(json["hourly"].as_array().unwrap().len(), 24);

            let back: TideRecord = serde_json::from_value(json).unwrap();
            assert_eq!(back, record);
        }
    }

    mod station_info_tests {
        use super::*;

        #[test]
        fn test_station_creation_valid() {
            let station = create_test_station_info();
            assert!(station.validate().is_ok());
            assert!(station.is_classified());
        }

        #[test]
        fn test_station_code_validation() {
            let mut station = create_test_station_info();

            station.code = "TOK".to_string();
            assert!(station.validate().is_err());

            station.code = "t k".to_string();
            assert!(station.validate().is_err());

            station.code = "WN".to_string();
            assert!(station.validate().is_ok());
        }

        #[test]
        fn test_station_rejects_placeholder_name() {
            let mut station = create_test_station_info();
            station.name = PLACEHOLDER_STATION_NAME.to_string();
            assert!(station.validate().is_err());

            station.name = "  ".to_string();
            assert!(station.validate().is_err());
        }

        #[test]
        fn test_station_unclassified_sentinel() {
            let mut station = create_test_station_info();
            station.region = UNCLASSIFIED_REGION.to_string();
            assert!(station.validate().is_ok());
            assert!(!station.is_classified());
        }

        #[test]
        fn test_station_serde_round_trip() {
            let station = create_test_station_info();
            let json = serde_json::to_string(&station).unwrap();
            let back: StationInfo = serde_json::from_str(&json).unwrap();
            assert_eq!(station, back);
        }
    }
}
