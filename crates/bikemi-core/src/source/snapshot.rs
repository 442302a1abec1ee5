// crates/bikemi-core/src/source/snapshot.rs

//! Reading previously saved source documents from disk, so the whole
//! pipeline runs offline (the feed JSON and the raw stations page).

use super::{open_data, scrape};
use crate::error::{Result, StationError};
use crate::model::{StationBasic, StationExtra, StationFull};
use crate::reconcile::merge;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::info;

fn open_stream(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| {
        StationError::NotFound(format!("Snapshot not found at {}: {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

/// Load a saved `station_information.json`.
pub fn load_basic_file(path: impl AsRef<Path>) -> Result<Vec<StationBasic>> {
    let path = path.as_ref();
    open_data::parse_station_information(open_stream(path)?)
}

/// Load a saved copy of the stations page.
pub fn load_extra_file(path: impl AsRef<Path>) -> Result<Vec<StationExtra>> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(StationError::NotFound(format!(
            "Snapshot not found at {}",
            path.display()
        )));
    }
    let html = fs::read_to_string(path)?;
    scrape::parse_station_extra(&html)
}

/// Load both snapshots and merge them.
pub fn load_stations(
    basic_path: impl AsRef<Path>,
    extra_path: impl AsRef<Path>,
) -> Result<Vec<StationFull>> {
    let basic = load_basic_file(basic_path.as_ref())?;
    let extra = load_extra_file(extra_path.as_ref())?;
    let stations = merge(&basic, &extra)?;
    info!(
        stations = stations.len(),
        basic = %basic_path.as_ref().display(),
        extra = %extra_path.as_ref().display(),
        "loaded station snapshot"
    );
    Ok(stations)
}
