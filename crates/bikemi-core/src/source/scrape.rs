// crates/bikemi-core/src/source/scrape.rs

//! # Stations Page Extractor
//!
//! The public stations page carries its live availability as a JSON map
//! inlined in a script payload. This module finds that map between two
//! fixed markers and decodes it into [`StationExtra`] records. A markup
//! change on the website only ever touches this file.

use super::IdRaw;
use crate::error::{Result, StationError};
use crate::model::StationExtra;
use crate::text::fold_key;
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Text right before the first station entry.
pub const START_MARKER: &str = r#""stationMapPage","slug":null},"#;

/// Text right after the station map.
pub const END_MARKER: &str = r#"},"baseUrl":"https://bikemi.com""#;

/// Raw station entry:
/// {
///   "id": "101", "name": "...", "title": "...",
///   "availabilityInfo": {
///     "availableVehicleCategories": [ { "category": "bike", "count": 3 }, ... ],
///     "availableDocks": 12, "availableVirtualDocks": 0, "availablePhysicalDocks": 12
///   }
/// }
#[derive(Debug, Deserialize)]
struct StationEntryRaw {
    id: IdRaw,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "availabilityInfo")]
    availability: AvailabilityRaw,
}

#[derive(Debug, Deserialize)]
struct AvailabilityRaw {
    #[serde(rename = "availableVehicleCategories", default)]
    vehicle_categories: Vec<VehicleCategoryRaw>,
    #[serde(rename = "availableDocks", default)]
    available_docks: u32,
    #[serde(rename = "availableVirtualDocks", default)]
    available_virtual_docks: u32,
    #[serde(rename = "availablePhysicalDocks", default)]
    available_physical_docks: u32,
}

#[derive(Debug, Deserialize)]
struct VehicleCategoryRaw {
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vehicle {
    Bike,
    Ebike,
    EbikeWithChildseat,
}

impl Vehicle {
    /// Listing order used by the site when categories are unnamed.
    const BY_POSITION: [Vehicle; 3] = [Vehicle::Bike, Vehicle::Ebike, Vehicle::EbikeWithChildseat];

    fn from_category(name: &str) -> Option<Self> {
        let key = fold_key(name).to_ascii_lowercase();
        if key.contains("child") {
            Some(Vehicle::EbikeWithChildseat)
        } else if key.contains("ebike") || key.contains("electric") {
            Some(Vehicle::Ebike)
        } else if key == "bike" || key == "bicycle" || key == "classic" {
            Some(Vehicle::Bike)
        } else {
            None
        }
    }

    /// Named categories map by name only; position applies to unnamed ones.
    fn resolve(category: Option<&str>, position: usize) -> Option<Self> {
        match category {
            Some(name) => Self::from_category(name),
            None => Self::BY_POSITION.get(position).copied(),
        }
    }
}

impl From<StationEntryRaw> for StationExtra {
    fn from(raw: StationEntryRaw) -> Self {
        let mut extra = StationExtra {
            station_id: raw.id.into_string(),
            name: raw.name,
            title: raw.title,
            bike: 0,
            ebike: 0,
            ebike_with_childseat: 0,
            available_docks: raw.availability.available_docks,
            available_virtual_docks: raw.availability.available_virtual_docks,
            available_physical_docks: raw.availability.available_physical_docks,
        };

        for (pos, cat) in raw.availability.vehicle_categories.iter().enumerate() {
            match Vehicle::resolve(cat.category.as_deref(), pos) {
                Some(Vehicle::Bike) => extra.bike = extra.bike.saturating_add(cat.count),
                Some(Vehicle::Ebike) => extra.ebike = extra.ebike.saturating_add(cat.count),
                Some(Vehicle::EbikeWithChildseat) => {
                    extra.ebike_with_childseat =
                        extra.ebike_with_childseat.saturating_add(cat.count)
                }
                None => debug!(
                    station_id = %extra.station_id,
                    category = ?cat.category,
                    "ignoring unknown vehicle category"
                ),
            }
        }
        extra
    }
}

/// Cut the station map out of the page and return it as a JSON object.
///
/// The map's opening brace sits inside the start marker's record, so it is
/// put back in front of the slice; the closing brace is part of the slice.
///
/// ```rust
/// use bikemi_core::source::scrape::extract_station_block;
///
/// let html = r#"<script>{"page":{"a":{"x":"stationMapPage","slug":null},"1":{"id":"1"}}},"baseUrl":"https://bikemi.com"}</script>"#;
/// assert_eq!(extract_station_block(html).unwrap(), r#"{"1":{"id":"1"}}"#);
/// ```
pub fn extract_station_block(html: &str) -> Result<String> {
    let start = html
        .find(START_MARKER)
        .ok_or_else(|| StationError::Scrape("start marker not found".into()))?
        + START_MARKER.len();
    let len = html[start..]
        .find(END_MARKER)
        .ok_or_else(|| StationError::Scrape("end marker not found after start marker".into()))?;

    Ok(format!("{{{}", &html[start..start + len]))
}

/// Decode the live availability of every station on the page.
pub fn parse_station_extra(html: &str) -> Result<Vec<StationExtra>> {
    let block = extract_station_block(html)?;
    let entries: BTreeMap<String, StationEntryRaw> = serde_json::from_str(&block)?;
    let stations: Vec<StationExtra> = entries.into_values().map(Into::into).collect();
    debug!(stations = stations.len(), "decoded stations page");
    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(entries: &str) -> String {
        format!(
            concat!(
                r#"<html><script id="__NEXT_DATA__">{{"props":{{"pageProps":{{"#,
                r#""meta":{{"type":"stationMapPage","slug":null}},{}}}}},"#,
                r#""baseUrl":"https://bikemi.com","locale":"it"}}</script></html>"#
            ),
            entries
        )
    }

    const ENTRIES: &str = r#"
        "st-101": {"id": "101", "name": "piave", "title": "Viale Piave",
            "availabilityInfo": {
                "availableVehicleCategories": [{"count": 3}, {"count": 2}, {"count": 1}],
                "availableDocks": 12, "availableVirtualDocks": 4, "availablePhysicalDocks": 8}},
        "st-202": {"id": 202, "name": "duomo", "title": "Piazza Duomo",
            "availabilityInfo": {
                "availableVehicleCategories": [
                    {"category": "ebike_with_childseat", "count": 5},
                    {"category": "bike", "count": 7},
                    {"category": "ebike", "count": 9}],
                "availableDocks": 0, "availableVirtualDocks": 0, "availablePhysicalDocks": 0}}"#;

    #[test]
    fn extracts_block_between_markers() {
        let block = extract_station_block(&page(ENTRIES)).unwrap();
        assert!(block.starts_with('{'));
        assert!(block.ends_with('}'));
        let v: serde_json::Value = serde_json::from_str(&block).unwrap();
        assert_eq!(v.as_object().unwrap().len(), 2);
    }

    #[test]
    fn positional_categories() {
        let stations = parse_station_extra(&page(ENTRIES)).unwrap();
        let piave = stations.iter().find(|s| s.station_id == "101").unwrap();
        assert_eq!((piave.bike, piave.ebike, piave.ebike_with_childseat), (3, 2, 1));
        assert_eq!(piave.available_docks, 12);
        assert_eq!(piave.available_virtual_docks, 4);
        assert_eq!(piave.available_physical_docks, 8);
        assert_eq!(piave.title.as_deref(), Some("Viale Piave"));
    }

    #[test]
    fn named_categories_win_over_position() {
        let stations = parse_station_extra(&page(ENTRIES)).unwrap();
        let duomo = stations.iter().find(|s| s.station_id == "202").unwrap();
        assert_eq!((duomo.bike, duomo.ebike, duomo.ebike_with_childseat), (7, 9, 5));
    }

    #[test]
    fn missing_categories_count_zero() {
        let entries = r#""x": {"id": "9", "availabilityInfo": {
            "availableVehicleCategories": [{"count": 4}], "availableDocks": 1}}"#;
        let stations = parse_station_extra(&page(entries)).unwrap();
        assert_eq!(stations[0].bike, 4);
        assert_eq!(stations[0].ebike, 0);
        assert_eq!(stations[0].ebike_with_childseat, 0);
        assert_eq!(stations[0].available_physical_docks, 0);
        assert_eq!(stations[0].name, None);
    }

    #[test]
    fn unknown_named_category_is_ignored() {
        let entries = r#""x": {"id": "9", "availabilityInfo": {
            "availableVehicleCategories": [
                {"category": "ebike", "count": 2},
                {"category": "cargo", "count": 7}]}}"#;
        let stations = parse_station_extra(&page(entries)).unwrap();
        let s = &stations[0];
        assert_eq!((s.bike, s.ebike, s.ebike_with_childseat), (0, 2, 0));
    }

    #[test]
    fn repeated_category_counts_saturate() {
        let entries = r#""x": {"id": "9", "availabilityInfo": {
            "availableVehicleCategories": [
                {"category": "bike", "count": 4294967295},
                {"category": "bike", "count": 1}]}}"#;
        let stations = parse_station_extra(&page(entries)).unwrap();
        assert_eq!(stations[0].bike, u32::MAX);
    }

    #[test]
    fn missing_markers_are_scrape_errors() {
        assert!(matches!(
            parse_station_extra("<html>maintenance</html>"),
            Err(StationError::Scrape(_))
        ));
        let truncated = r#"{"type":"stationMapPage","slug":null},"1":{}"#;
        assert!(matches!(
            extract_station_block(truncated),
            Err(StationError::Scrape(_))
        ));
    }

    #[test]
    fn garbled_payload_is_a_json_error() {
        assert!(matches!(
            parse_station_extra(&page(r#""1": {"id": "1""#)),
            Err(StationError::Json(_))
        ));
    }
}
