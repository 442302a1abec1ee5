// crates/bikemi-core/src/reconcile.rs

//! # Reconciler
//!
//! Pairs the open-data records with the scraped availability by
//! `station_id` and folds each pair into one [`StationFull`].

use crate::error::{ReconciliationError, Result, Side};
use crate::model::{StationBasic, StationExtra, StationFull};
use tracing::debug;

/// Field names owned by the extra side; feed attributes with these names
/// are shadowed.
const EXTRA_FIELDS: &[&str] = &[
    "station_id",
    "name",
    "title",
    "bike",
    "ebike",
    "ebike_with_childseat",
    "availableDocks",
    "availableVirtualDocks",
    "availablePhysicalDocks",
];

/// **Merge:** one [`StationFull`] per station, sorted by `station_id`.
///
/// Both inputs are sorted by id (on copies) and combined pairwise. The
/// two sides must describe exactly the same set of stations; anything else
/// is a [`ReconciliationError`]. Where both define a field, the extra side
/// wins.
///
/// ```rust
/// use bikemi_core::{merge, StationBasic, StationExtra};
///
/// let basic = vec![StationBasic {
///     station_id: "7".into(), name: "Loreto".into(), lat: 45.48, lon: 9.21,
///     address: None, capacity: Some(24), other: Default::default(),
/// }];
/// let extra = vec![StationExtra {
///     station_id: "7".into(), name: None, title: Some("P.le Loreto".into()),
///     bike: 3, ebike: 1, ebike_with_childseat: 0,
///     available_docks: 20, available_virtual_docks: 0, available_physical_docks: 20,
/// }];
///
/// let full = merge(&basic, &extra).unwrap();
/// assert_eq!(full[0].title, "P.le Loreto");
/// assert_eq!(full[0].capacity, Some(24));
/// ```
pub fn merge(basic: &[StationBasic], extra: &[StationExtra]) -> Result<Vec<StationFull>> {
    if basic.len() != extra.len() {
        return Err(ReconciliationError::LengthMismatch {
            basic: basic.len(),
            extra: extra.len(),
        }
        .into());
    }

    let mut basic: Vec<&StationBasic> = basic.iter().collect();
    let mut extra: Vec<&StationExtra> = extra.iter().collect();
    basic.sort_by(|a, b| a.station_id.cmp(&b.station_id));
    extra.sort_by(|a, b| a.station_id.cmp(&b.station_id));

    check_unique(basic.iter().map(|s| s.station_id.as_str()), Side::Basic)?;
    check_unique(extra.iter().map(|s| s.station_id.as_str()), Side::Extra)?;

    let mut out = Vec::with_capacity(basic.len());
    for (index, (b, e)) in basic.into_iter().zip(extra).enumerate() {
        if b.station_id != e.station_id {
            return Err(ReconciliationError::IdMismatch {
                index,
                basic_id: b.station_id.clone(),
                extra_id: e.station_id.clone(),
            }
            .into());
        }
        out.push(combine(b, e));
    }

    debug!(stations = out.len(), "merged basic and extra station info");
    Ok(out)
}

/// Ids must already be sorted.
fn check_unique<'a>(ids: impl Iterator<Item = &'a str>, side: Side) -> Result<()> {
    let mut prev: Option<&str> = None;
    for id in ids {
        if prev == Some(id) {
            return Err(ReconciliationError::DuplicateId {
                side,
                station_id: id.to_owned(),
            }
            .into());
        }
        prev = Some(id);
    }
    Ok(())
}

fn combine(b: &StationBasic, e: &StationExtra) -> StationFull {
    let mut other = b.other.clone();
    other.retain(|k, _| !EXTRA_FIELDS.contains(&k.as_str()));

    let name = e.name.clone().unwrap_or_else(|| b.name.clone());
    let title = e.title.clone().unwrap_or_else(|| name.clone());

    StationFull {
        station_id: e.station_id.clone(),
        name,
        title,
        lat: b.lat,
        lon: b.lon,
        address: b.address.clone(),
        capacity: b.capacity,
        bike: e.bike,
        ebike: e.ebike,
        ebike_with_childseat: e.ebike_with_childseat,
        available_docks: e.available_docks,
        available_virtual_docks: e.available_virtual_docks,
        available_physical_docks: e.available_physical_docks,
        other,
    }
}
