//! Configuration management and validation.
//!
//! Provides the layered configuration used by the CLI: built-in defaults,
//! optionally overridden by a TOML config file, optionally overridden by
//! command-line arguments. Settings cover the output layout, the JMA
//! endpoints, and logging.

use crate::constants::{
    DEFAULT_TARGET_YEAR, RAW_TEXT_CACHE_DIR, RECORDS_OUTPUT_DIR, STATION_DATA_BASE_URL,
    STATION_LIST_URL, STATIONS_OUTPUT_FILENAME, http,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Processing and output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Root output directory for all artifacts
    pub output_path: PathBuf,

    /// Restrict processing to these station codes (empty = all stations)
    pub stations: Vec<String>,

    /// Report what would be done without downloading or writing
    pub dry_run: bool,

    /// Re-download station text even when a cached copy exists
    pub force_refresh: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("data"),
            stations: Vec::new(),
            dry_run: false,
            force_refresh: false,
        }
    }
}

/// JMA archive endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Station listing page URL
    pub station_list_url: String,

    /// Base URL for yearly per-station tide text
    pub station_data_base_url: String,

    /// Year of the published tables to download
    pub target_year: i32,

    /// Number of concurrent station downloads
    pub concurrent_downloads: usize,

    /// Timeout for the listing page request (seconds)
    pub listing_timeout_secs: u64,

    /// Timeout for one station text request (seconds)
    pub station_timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            station_list_url: STATION_LIST_URL.to_string(),
            station_data_base_url: STATION_DATA_BASE_URL.to_string(),
            target_year: DEFAULT_TARGET_YEAR,
            concurrent_downloads: http::DEFAULT_CONCURRENT_DOWNLOADS,
            listing_timeout_secs: http::LISTING_TIMEOUT_SECS,
            station_timeout_secs: http::STATION_TIMEOUT_SECS,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Application configuration assembled from defaults, file, and CLI layers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub processing: ProcessingConfig,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location under the user configuration directory
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(config_dir.join("jma-tide-processor").join("config.toml"))
    }

    /// Load configuration in layers: defaults, then an optional TOML file,
    /// then an optional output path override
    pub fn load_layered(output_path: Option<PathBuf>, config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(output) = output_path {
            config.processing.output_path = output;
        }

        Ok(config)
    }

    /// Parse a TOML config file; missing sections fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading config file: {}", path.display());
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read config file '{}'", path.display()), e))?;
        toml::from_str(&contents).map_err(|e| {
            Error::configuration(format!("Invalid config file '{}': {}", path.display(), e))
        })
    }

    /// Validate configuration after all layers are applied
    pub fn validate(&self) -> Result<()> {
        if self.processing.output_path.as_os_str().is_empty() {
            return Err(Error::configuration("Output path must not be empty"));
        }

        if self.fetch.concurrent_downloads == 0 {
            return Err(Error::configuration(
                "concurrent_downloads must be at least 1",
            ));
        }

        // Two-digit years are expanded into a fixed century window, so the
        // target year must live inside it
        if !(2000..=2099).contains(&self.fetch.target_year) {
            return Err(Error::configuration(format!(
                "target_year {} is outside the supported range 2000-2099",
                self.fetch.target_year
            )));
        }

        if self.fetch.station_list_url.is_empty() || self.fetch.station_data_base_url.is_empty() {
            return Err(Error::configuration("JMA endpoint URLs must not be empty"));
        }

        for code in &self.processing.stations {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(Error::configuration(format!(
                    "Invalid station code '{}': expected 2 alphanumeric characters",
                    code
                )));
            }
        }

        Ok(())
    }

    /// Directory holding cached raw tide text
    pub fn raw_text_dir(&self) -> PathBuf {
        self.processing.output_path.join(RAW_TEXT_CACHE_DIR)
    }

    /// Directory holding per-station record arrays
    pub fn records_dir(&self) -> PathBuf {
        self.processing.output_path.join(RECORDS_OUTPUT_DIR)
    }

    /// Path of the station catalog file
    pub fn stations_file(&self) -> PathBuf {
        self.processing.output_path.join(STATIONS_OUTPUT_FILENAME)
    }

    /// Create the output directory tree if it does not exist
    pub fn ensure_output_directories(&self) -> Result<()> {
        for dir in [
            &self.processing.output_path,
            &self.raw_text_dir(),
            &self.records_dir(),
        ] {
            std::fs::create_dir_all(dir).map_err(|e| {
                Error::io(format!("Failed to create directory '{}'", dir.display()), e)
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.fetch.target_year, DEFAULT_TARGET_YEAR);
        assert_eq!(config.processing.output_path, PathBuf::from("data"));
    }

    #[test]
    fn test_partial_toml_overrides_defaults() {
        let toml_str = r#"
            [processing]
            output_path = "/tmp/tides"

            [fetch]
            target_year = 2027
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.processing.output_path, PathBuf::from("/tmp/tides"));
        assert_eq!(config.fetch.target_year, 2027);
        // Untouched sections keep their defaults
        assert_eq!(
            config.fetch.concurrent_downloads,
            http::DEFAULT_CONCURRENT_DOWNLOADS
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_validate_rejects_zero_concurrency() {
        let mut config = Config::default();
        config.fetch.concurrent_downloads = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_window_year() {
        let mut config = Config::default();
        config.fetch.target_year = 1999;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_station_code() {
        let mut config = Config::default();
        config.processing.stations = vec!["TKY".to_string()];
        assert!(config.validate().is_err());

        config.processing.stations = vec!["T!".to_string()];
        assert!(config.validate().is_err());

        config.processing.stations = vec!["TK".to_string(), "OS".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_layout_paths() {
        let mut config = Config::default();
        config.processing.output_path = PathBuf::from("/srv/tide");
        assert_eq!(config.raw_text_dir(), PathBuf::from("/srv/tide/raw_txt"));
        assert_eq!(config.records_dir(), PathBuf::from("/srv/tide/raw"));
        assert_eq!(
            config.stations_file(),
            PathBuf::from("/srv/tide/stations.json")
        );
    }
}
