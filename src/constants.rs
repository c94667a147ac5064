//! Application constants for the JMA tide processor
//!
//! This module contains the fixed-width line geometry, JMA endpoint
//! templates, sentinel values, and output layout conventions used
//! throughout the application.

// =============================================================================
// Tide Line Geometry
// =============================================================================

/// Nominal width of one tide line in characters
pub const LINE_WIDTH: usize = 80;

/// Width of the hourly data block (columns 0-71)
pub const HOURLY_FIELD_WIDTH: usize = 72;

/// Width of one hourly height field
pub const HOURLY_CHUNK_WIDTH: usize = 3;

/// Number of hourly values per line (hours 0-23)
pub const HOURS_PER_DAY: usize = 24;

/// Two-digit years are interpreted in a fixed century window (YY -> 2000+YY)
pub const CENTURY_BASE: i32 = 2000;

/// Fixed column ranges of the 8-character metadata suffix
pub mod metadata_columns {
    use std::ops::Range;

    /// Two-digit year
    pub const YEAR: Range<usize> = 72..74;

    /// Two-digit month
    pub const MONTH: Range<usize> = 74..76;

    /// Two-digit day
    pub const DAY: Range<usize> = 76..78;

    /// Two-character station code
    pub const STATION: Range<usize> = 78..80;
}

// =============================================================================
// JMA Endpoints
// =============================================================================

/// Station listing page (one anchor per station, grouped by prefecture)
pub const STATION_LIST_URL: &str = "https://www.data.jma.go.jp/kaiyou/db/tide/suisan/station.php";

/// Base URL for yearly per-station tide text
pub const STATION_DATA_BASE_URL: &str =
    "https://www.data.jma.go.jp/kaiyou/data/db/tide/suisan/txt";

/// Year the published tables currently cover
pub const DEFAULT_TARGET_YEAR: i32 = 2026;

// =============================================================================
// Sentinel Values
// =============================================================================

/// Generic link text on the listing page that is not a station name
pub const PLACEHOLDER_STATION_NAME: &str = "潮汐表";

/// Region label for station codes absent from the curated table
pub const UNCLASSIFIED_REGION: &str = "その他";

// =============================================================================
// Output Layout
// =============================================================================

/// Station catalog output filename
pub const STATIONS_OUTPUT_FILENAME: &str = "stations.json";

/// Directory for per-station record arrays within the output directory
pub const RECORDS_OUTPUT_DIR: &str = "raw";

/// Directory for cached raw tide text within the output directory
pub const RAW_TEXT_CACHE_DIR: &str = "raw_txt";

/// File extension of cached tide text
pub const TEXT_FILE_EXTENSION: &str = "txt";

// =============================================================================
// HTTP Client Defaults
// =============================================================================

/// HTTP client settings for the JMA archive
pub mod http {
    /// Timeout for the station listing page (seconds)
    pub const LISTING_TIMEOUT_SECS: u64 = 20;

    /// Timeout for one per-station text download (seconds)
    pub const STATION_TIMEOUT_SECS: u64 = 10;

    /// User agent presented to the JMA archive
    pub const USER_AGENT: &str = concat!("jma_tide_processor/", env!("CARGO_PKG_VERSION"));

    /// Default number of concurrent station downloads
    pub const DEFAULT_CONCURRENT_DOWNLOADS: usize = 4;
}

// =============================================================================
// Region Display Order
// =============================================================================

/// Prefecture display order, north to south, with the unclassified sentinel
/// last. Used for report grouping; persisted files sort lexicographically.
pub const REGION_DISPLAY_ORDER: &[&str] = &[
    "北海道",
    "青森",
    "岩手",
    "宮城",
    "秋田",
    "山形",
    "福島",
    "茨城",
    "栃木",
    "群馬",
    "埼玉",
    "千葉",
    "東京",
    "神奈川",
    "新潟",
    "富山",
    "石川",
    "福井",
    "山梨",
    "長野",
    "岐阜",
    "静岡",
    "愛知",
    "三重",
    "滋賀",
    "京都",
    "大阪",
    "兵庫",
    "奈良",
    "和歌山",
    "鳥取",
    "島根",
    "岡山",
    "広島",
    "山口",
    "徳島",
    "香川",
    "愛媛",
    "高知",
    "福岡",
    "佐賀",
    "長崎",
    "熊本",
    "大分",
    "宮崎",
    "鹿児島",
    "沖縄",
    "その他",
];

// =============================================================================
// Helper Functions
// =============================================================================

/// Cached text filename for a station code
pub fn station_text_filename(code: &str) -> String {
    format!("{}.{}", code, TEXT_FILE_EXTENSION)
}

/// Record array filename for a station code
pub fn station_records_filename(code: &str) -> String {
    format!("{}.json", code)
}

/// Rank of a region in the north-to-south display order
///
/// Regions missing from the order table sort after everything else.
pub fn region_display_rank(region: &str) -> usize {
    REGION_DISPLAY_ORDER
        .iter()
        .position(|&r| r == region)
        .unwrap_or(REGION_DISPLAY_ORDER.len())
}
