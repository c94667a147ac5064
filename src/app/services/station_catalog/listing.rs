//! Station link extraction from the JMA listing page
//!
//! The listing page is table-heavy HTML, but every station appears as an
//! anchor of the form `suisan.php?stn=XX...>name</a>`. Matching the
//! anchors directly sidesteps the table structure entirely.

use regex::Regex;
use std::sync::OnceLock;

use super::regions::resolve_region;
use crate::app::models::StationInfo;
use crate::constants::PLACEHOLDER_STATION_NAME;

static STATION_LINK_PATTERN: OnceLock<Regex> = OnceLock::new();

fn station_link_pattern() -> &'static Regex {
    STATION_LINK_PATTERN.get_or_init(|| {
        Regex::new(r"suisan\.php\?stn=([A-Z0-9]{2})[^>]*>(.*?)</a>")
            .expect("Invalid station link pattern")
    })
}

/// Extract stations from listing page HTML, in document order
///
/// Each station page is linked twice (name and tide-table shortcut), so
/// the shortcut text is filtered here and duplicate codes are left for
/// the catalog to collapse. Names are trimmed; anchors with no visible
/// text are dropped.
pub fn extract_listed_stations(html: &str) -> Vec<StationInfo> {
    station_link_pattern()
        .captures_iter(html)
        .filter_map(|caps| {
            let code = caps.get(1)?.as_str();
            let name = caps.get(2)?.as_str().trim();
            if name.is_empty() || name == PLACEHOLDER_STATION_NAME {
                return None;
            }
            StationInfo::new(
                code.to_string(),
                name.to_string(),
                resolve_region(code).to_string(),
            )
            .ok()
        })
        .collect()
}
