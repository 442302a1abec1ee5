// crates/bikemi-core/src/source/open_data.rs

//! Decoder for the GBFS `station_information` feed.

use super::IdRaw;
use crate::error::Result;
use crate::model::StationBasic;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;
use tracing::debug;

/// Raw feed document:
/// {
///   "last_updated": 1700000000,
///   "data": { "stations": [ { "station_id": "1", "name": "...", ... } ] }
/// }
#[derive(Debug, Deserialize)]
struct FeedRaw {
    data: FeedDataRaw,
}

#[derive(Debug, Deserialize)]
struct FeedDataRaw {
    stations: Vec<StationRaw>,
}

/// Raw station entry as it comes from the feed.
#[derive(Debug, Deserialize)]
struct StationRaw {
    station_id: IdRaw,
    name: String,
    lat: f64,
    lon: f64,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    capacity: Option<u32>,
    #[serde(flatten)]
    other: BTreeMap<String, Value>,
}

impl From<StationRaw> for StationBasic {
    fn from(raw: StationRaw) -> Self {
        let mut other = raw.other;
        // Nested attributes (rental_uris, ...) have no place in a flat record.
        other.retain(|_, v| !(v.is_object() || v.is_array() || v.is_null()));

        StationBasic {
            station_id: raw.station_id.into_string(),
            name: raw.name,
            lat: raw.lat,
            lon: raw.lon,
            address: raw.address,
            capacity: raw.capacity,
            other,
        }
    }
}

/// Decode a `station_information` document.
pub fn parse_station_information<R: Read>(reader: R) -> Result<Vec<StationBasic>> {
    let raw: FeedRaw = serde_json::from_reader(reader)?;
    Ok(convert(raw))
}

/// Same as [`parse_station_information`], from an in-memory string.
///
/// ```rust
/// use bikemi_core::source::open_data::parse_station_information_str;
///
/// let doc = r#"{"data":{"stations":[
///     {"station_id":"12","name":"Cairoli","lat":45.468,"lon":9.182,"capacity":21}
/// ]}}"#;
/// let stations = parse_station_information_str(doc).unwrap();
/// assert_eq!(stations[0].name, "Cairoli");
/// assert_eq!(stations[0].capacity, Some(21));
/// ```
pub fn parse_station_information_str(doc: &str) -> Result<Vec<StationBasic>> {
    let raw: FeedRaw = serde_json::from_str(doc)?;
    Ok(convert(raw))
}

fn convert(raw: FeedRaw) -> Vec<StationBasic> {
    let stations: Vec<StationBasic> = raw.data.stations.into_iter().map(Into::into).collect();
    debug!(stations = stations.len(), "decoded open-data feed");
    stations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StationError;
    use serde_json::json;

    #[test]
    fn decodes_feed_and_keeps_scalar_attributes() {
        let doc = json!({
            "last_updated": 1700000000,
            "ttl": 10,
            "data": {"stations": [
                {
                    "station_id": 101,
                    "name": "Viale Piave",
                    "address": "Viale Piave 1",
                    "lat": 45.4735,
                    "lon": 9.2052,
                    "capacity": 24,
                    "is_virtual_station": false,
                    "cross_street": null,
                    "rental_uris": {"android": "x", "ios": "y"}
                },
                {"station_id": "202", "name": "Duomo", "lat": 45.464, "lon": 9.19}
            ]}
        })
        .to_string();

        let stations = parse_station_information(doc.as_bytes()).unwrap();
        assert_eq!(stations.len(), 2);

        let piave = &stations[0];
        assert_eq!(piave.station_id, "101");
        assert_eq!(piave.address.as_deref(), Some("Viale Piave 1"));
        assert_eq!(piave.other.get("is_virtual_station"), Some(&json!(false)));
        assert!(!piave.other.contains_key("rental_uris"));
        assert!(!piave.other.contains_key("cross_street"));

        let duomo = &stations[1];
        assert_eq!(duomo.capacity, None);
        assert!(duomo.other.is_empty());
    }

    #[test]
    fn missing_coordinates_are_rejected() {
        let doc = r#"{"data":{"stations":[{"station_id":"1","name":"x","lat":45.0}]}}"#;
        assert!(matches!(
            parse_station_information_str(doc),
            Err(StationError::Json(_))
        ));
    }
}
