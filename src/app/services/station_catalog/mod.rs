//! Station catalog service for the JMA tide station inventory
//!
//! The catalog holds one entry per station code, built either by scraping
//! the JMA listing page or by reloading previously stored stations.
//! Lookups are O(1) by code; ordered views exist for persistence and
//! reporting.

use std::collections::HashMap;

use crate::app::models::StationInfo;
use crate::constants::region_display_rank;
use crate::{Error, Result};

pub mod listing;
pub mod regions;

#[cfg(test)]
pub mod tests;

// Re-export key functions for convenience
pub use listing::extract_listed_stations;
pub use regions::resolve_region;

/// Catalog of tide stations indexed by two-character code
#[derive(Debug, Clone, Default)]
pub struct StationCatalog {
    /// Stations indexed by code for O(1) lookups
    pub(crate) stations: HashMap<String, StationInfo>,
}

impl StationCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            stations: HashMap::new(),
        }
    }

    /// Build a catalog from listing page HTML
    ///
    /// Fails when the page yields no stations at all, which means the
    /// page layout changed or the fetch returned an error page.
    pub fn from_listing_html(html: &str) -> Result<Self> {
        let mut catalog = Self::new();
        for station in listing::extract_listed_stations(html) {
            catalog.insert(station);
        }

        if catalog.is_empty() {
            return Err(Error::station_catalog(
                "Station listing page contained no station links".to_string(),
            ));
        }

        Ok(catalog)
    }

    /// Build a catalog from previously stored stations
    pub fn from_stations(stations: Vec<StationInfo>) -> Self {
        let mut catalog = Self::new();
        for station in stations {
            catalog.insert(station);
        }
        catalog
    }

    /// Insert a station, replacing any earlier entry with the same code
    pub fn insert(&mut self, station: StationInfo) {
        self.stations.insert(station.code.clone(), station);
    }

    /// Get a station by code (O(1) lookup)
    pub fn get(&self, code: &str) -> Option<&StationInfo> {
        self.stations.get(code)
    }

    /// Check whether a code is present in the catalog
    pub fn contains(&self, code: &str) -> bool {
        self.stations.contains_key(code)
    }

    /// Total number of stations in the catalog
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Check whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations sorted by (region, name), the order used for persistence
    pub fn sorted_stations(&self) -> Vec<&StationInfo> {
        let mut stations: Vec<&StationInfo> = self.stations.values().collect();
        stations.sort_by(|a, b| {
            (&a.region, &a.name, &a.code).cmp(&(&b.region, &b.name, &b.code))
        });
        stations
    }

    /// Stations grouped by region, north to south
    ///
    /// Groups follow the geographic display order; stations within a
    /// group sort by name. Regions the display order does not know come
    /// last, alphabetically.
    pub fn grouped_by_region(&self) -> Vec<(String, Vec<&StationInfo>)> {
        let mut groups: HashMap<&str, Vec<&StationInfo>> = HashMap::new();
        for station in self.stations.values() {
            groups
                .entry(station.region.as_str())
                .or_default()
                .push(station);
        }

        let mut grouped: Vec<(String, Vec<&StationInfo>)> = groups
            .into_iter()
            .map(|(region, mut stations)| {
                stations.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));
                (region.to_string(), stations)
            })
            .collect();
        grouped.sort_by(|a, b| {
            region_display_rank(&a.0)
                .cmp(&region_display_rank(&b.0))
                .then_with(|| a.0.cmp(&b.0))
        });
        grouped
    }
}
