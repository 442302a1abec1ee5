// crates/bikemi-core/src/query.rs

//! Ordering and proximity queries over a merged snapshot.

use crate::error::{Result, StationError};
use crate::model::StationFull;
use geo::{Distance, Geodesic, Point};

/// Stable ascending sort by one field, on a copy of the input.
///
/// `key` is a serialized field name (see [`crate::model::FIELDS`]) or a
/// feed attribute. Every station must carry the field, otherwise the call
/// fails with [`StationError::FieldNotFound`].
///
/// ```rust
/// # use bikemi_core::StationFull;
/// # fn s(id: &str, bike: u32) -> StationFull { serde_json::from_value(serde_json::json!({
/// #   "station_id": id, "name": id, "title": id, "lat": 45.0, "lon": 9.0, "bike": bike,
/// #   "ebike": 0, "ebike_with_childseat": 0, "availableDocks": 0,
/// #   "availableVirtualDocks": 0, "availablePhysicalDocks": 0 })).unwrap() }
/// use bikemi_core::sort;
///
/// let stations = vec![s("a", 5), s("b", 1), s("c", 5)];
/// let sorted = sort(&stations, "bike").unwrap();
/// let ids: Vec<_> = sorted.iter().map(|s| s.station_id.as_str()).collect();
/// assert_eq!(ids, ["b", "a", "c"]);
///
/// assert!(sort(&stations, "colour").is_err());
/// ```
pub fn sort(stations: &[StationFull], key: &str) -> Result<Vec<StationFull>> {
    if let Some(missing) = stations.iter().find(|s| s.field(key).is_none()) {
        tracing::debug!(key, station_id = %missing.station_id, "sort key missing");
        return Err(StationError::FieldNotFound {
            key: key.to_owned(),
        });
    }

    let mut out = stations.to_vec();
    // Checked above; `None` cannot occur here.
    out.sort_by(|a, b| a.field(key).cmp(&b.field(key)));
    Ok(out)
}

/// Geodesic (WGS-84 ellipsoid) distance in kilometres between a station
/// and a point.
pub fn distance_km(station: &StationFull, lat: f64, lon: f64) -> f64 {
    Geodesic.distance(Point::new(lon, lat), station.point()) / 1000.0
}

/// The station closest to `(lat, lon)`.
///
/// Ties go to the station that comes first in `stations`.
pub fn nearest(stations: &[StationFull], lat: f64, lon: f64) -> Result<&StationFull> {
    let mut best: Option<(&StationFull, f64)> = None;
    for station in stations {
        let d = distance_km(station, lat, lon);
        let closer = match best {
            None => true,
            Some((_, best_d)) => d < best_d || (best_d.is_nan() && !d.is_nan()),
        };
        if closer {
            best = Some((station, d));
        }
    }
    best.map(|(s, _)| s).ok_or(StationError::EmptyInput)
}
