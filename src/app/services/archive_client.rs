//! HTTP client for the JMA tide archive
//!
//! Two endpoints matter: the station listing page and the per-station
//! yearly text files. Both are plain GETs. A yearly file that does not
//! exist comes back as 404, which means the station has no published
//! predictions for that year and is not an error.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::constants::http;
use crate::{Error, Result};

/// Client for the JMA tide archive endpoints
///
/// The listing page and the yearly files get separate timeouts: the
/// listing is one large page, the yearly files are small and numerous.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    client: reqwest::Client,
    config: FetchConfig,
}

impl ArchiveClient {
    /// Create a new archive client from fetch settings
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(http::USER_AGENT)
            .build()
            .map_err(|e| Error::http("Failed to build HTTP client", e))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Download URL for one station's yearly tide text
    pub fn station_text_url(&self, code: &str) -> String {
        format!(
            "{}/{}/{}.txt",
            self.config.station_data_base_url, self.config.target_year, code
        )
    }

    /// Fetch the station listing page
    pub async fn fetch_station_listing(&self) -> Result<String> {
        let url = &self.config.station_list_url;
        debug!("Fetching station listing from {}", url);

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.listing_timeout_secs))
            .send()
            .await
            .map_err(|e| Error::http(format!("Failed to fetch station listing from {}", url), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::fetch(url.clone(), status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| Error::http("Failed to read station listing body", e))
    }

    /// Fetch one station's yearly tide text
    ///
    /// Returns `Ok(None)` when the archive has no file for the station,
    /// so callers can skip it without treating the batch as failed.
    pub async fn fetch_station_text(&self, code: &str) -> Result<Option<String>> {
        let url = self.station_text_url(code);
        debug!("Fetching tide text for {} from {}", code, url);

        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.config.station_timeout_secs))
            .send()
            .await
            .map_err(|e| Error::http(format!("Failed to fetch tide text for {}", code), e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!("No tide text published for station {} ({})", code, url);
            return Ok(None);
        }
        if !status.is_success() {
            return Err(Error::fetch(url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::http(format!("Failed to read tide text for {}", code), e))?;

        Ok(Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_text_url_uses_year_and_code() {
        let client = ArchiveClient::new(&FetchConfig::default()).unwrap();
        assert_eq!(
            client.station_text_url("TK"),
            "https://www.data.jma.go.jp/kaiyou/data/db/tide/suisan/txt/2026/TK.txt"
        );
    }

    #[test]
    fn test_station_text_url_respects_configured_base() {
        let config = FetchConfig {
            station_data_base_url: "http://localhost:9000/tide".to_string(),
            target_year: 2027,
            ..FetchConfig::default()
        };

        let client = ArchiveClient::new(&config).unwrap();
        assert_eq!(
            client.station_text_url("OS"),
            "http://localhost:9000/tide/2027/OS.txt"
        );
    }

    #[test]
    fn test_client_builds_from_defaults() {
        assert!(ArchiveClient::new(&FetchConfig::default()).is_ok());
    }
}
