//! JSON persistence for tide records and the station catalog
//!
//! Output is pretty-printed with two-space indentation and unescaped
//! UTF-8, so the station names stay readable in the files. Parent
//! directories are created on demand.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::app::models::{StationInfo, TideRecord};
use crate::{Error, Result};

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, what: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::io(
                format!("Failed to create directory '{}'", parent.display()),
                e,
            )
        })?;
    }

    let body = serde_json::to_string_pretty(value)
        .map_err(|e| Error::serialization(format!("Failed to serialize {}", what), e))?;

    std::fs::write(path, body)
        .map_err(|e| Error::io(format!("Failed to write {} to '{}'", what, path.display()), e))?;

    debug!("Wrote {} to {}", what, path.display());
    Ok(())
}

/// Write one station's record array
///
/// Records are written in the order given; callers sort by date first.
pub fn write_records(path: &Path, records: &[TideRecord]) -> Result<()> {
    write_json(path, records, "tide records")
}

/// Write the station catalog file
pub fn write_stations(path: &Path, stations: &[&StationInfo]) -> Result<()> {
    write_json(path, stations, "station catalog")
}

/// Read a previously written station catalog file
pub fn read_stations(path: &Path) -> Result<Vec<StationInfo>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let body = std::fs::read_to_string(path).map_err(|e| {
        Error::io(
            format!("Failed to read station catalog '{}'", path.display()),
            e,
        )
    })?;

    serde_json::from_str(&body).map_err(|e| {
        Error::serialization(
            format!("Failed to parse station catalog '{}'", path.display()),
            e,
        )
    })
}
