// crates/bikemi-core/src/model.rs

//! # Station Records
//!
//! The two partial shapes a station arrives in ([`StationBasic`] from the
//! open-data feed, [`StationExtra`] from the website) and the merged
//! [`StationFull`] every query works on.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Identity and location of a station, as published by the open-data feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationBasic {
    pub station_id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Any further scalar attributes of the feed entry, kept by name.
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Live availability of a station, as scraped from the website.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationExtra {
    pub station_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub bike: u32,
    pub ebike: u32,
    pub ebike_with_childseat: u32,
    #[serde(rename = "availableDocks")]
    pub available_docks: u32,
    #[serde(rename = "availableVirtualDocks")]
    pub available_virtual_docks: u32,
    #[serde(rename = "availablePhysicalDocks")]
    pub available_physical_docks: u32,
}

/// The merged record: every field of [`StationBasic`] and [`StationExtra`].
///
/// Serializes with the source field names (`availableDocks`, ...) and the
/// feed's remaining attributes inlined.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StationFull {
    pub station_id: String,
    pub name: String,
    /// Display name; the website title when it has one, else the feed name.
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    pub bike: u32,
    pub ebike: u32,
    pub ebike_with_childseat: u32,
    #[serde(rename = "availableDocks")]
    pub available_docks: u32,
    #[serde(rename = "availableVirtualDocks")]
    pub available_virtual_docks: u32,
    #[serde(rename = "availablePhysicalDocks")]
    pub available_physical_docks: u32,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// Field names every [`StationFull`] understands, in their serialized form.
///
/// `address` and `capacity` are optional; feed attributes in
/// [`StationFull::other`] are addressable too.
pub const FIELDS: &[&str] = &[
    "station_id",
    "name",
    "title",
    "lat",
    "lon",
    "address",
    "capacity",
    "bike",
    "ebike",
    "ebike_with_childseat",
    "availableDocks",
    "availableVirtualDocks",
    "availablePhysicalDocks",
];

impl StationFull {
    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// All rentable vehicles, whatever the category.
    pub fn vehicles(&self) -> u64 {
        u64::from(self.bike) + u64::from(self.ebike) + u64::from(self.ebike_with_childseat)
    }

    /// Location as a `geo` point (x = lon, y = lat).
    pub fn point(&self) -> geo::Point<f64> {
        geo::Point::new(self.lon, self.lat)
    }

    /// Look up one field by its serialized name.
    ///
    /// Returns `None` for unknown names, for an optional field that is not
    /// set, and for feed attributes that are not scalars.
    ///
    /// ```rust
    /// # use bikemi_core::{StationFull, FieldValue};
    /// # let s: StationFull = serde_json::from_str(r#"{"station_id":"1","name":"a","title":"A",
    /// #   "lat":45.0,"lon":9.0,"bike":3,"ebike":0,"ebike_with_childseat":0,
    /// #   "availableDocks":1,"availableVirtualDocks":0,"availablePhysicalDocks":1}"#).unwrap();
    /// assert_eq!(s.field("bike"), Some(FieldValue::Int(3)));
    /// assert_eq!(s.field("capacity"), None);
    /// ```
    pub fn field(&self, key: &str) -> Option<FieldValue<'_>> {
        let v = match key {
            "station_id" => FieldValue::Str(&self.station_id),
            "name" => FieldValue::Str(&self.name),
            "title" => FieldValue::Str(&self.title),
            "lat" => FieldValue::Float(self.lat),
            "lon" => FieldValue::Float(self.lon),
            "address" => FieldValue::Str(self.address.as_deref()?),
            "capacity" => FieldValue::Int(self.capacity?.into()),
            "bike" => FieldValue::Int(self.bike.into()),
            "ebike" => FieldValue::Int(self.ebike.into()),
            "ebike_with_childseat" => FieldValue::Int(self.ebike_with_childseat.into()),
            "availableDocks" => FieldValue::Int(self.available_docks.into()),
            "availableVirtualDocks" => FieldValue::Int(self.available_virtual_docks.into()),
            "availablePhysicalDocks" => FieldValue::Int(self.available_physical_docks.into()),
            other => FieldValue::from_json(self.other.get(other)?)?,
        };
        Some(v)
    }

    /// Every populated field, typed fields first, then feed attributes.
    pub fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        let typed: &[&str] = FIELDS;
        typed
            .iter()
            .copied()
            .chain(self.other.keys().map(String::as_str))
            .filter_map(|k| self.field(k).map(|v| (k, v)))
            .collect()
    }
}

/// A borrowed view of one station field, ordered naturally.
///
/// Numbers compare numerically (integers and floats interoperate), strings
/// lexicographically. Values of different kinds order as
/// `Bool < number < Str`.
#[derive(Clone, Copy, Debug)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl<'a> FieldValue<'a> {
    fn from_json(v: &'a Value) -> Option<Self> {
        match v {
            Value::String(s) => Some(FieldValue::Str(s)),
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::Number(n) => n
                .as_i64()
                .map(FieldValue::Int)
                .or_else(|| n.as_f64().map(FieldValue::Float)),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Bool(_) => 0,
            FieldValue::Int(_) | FieldValue::Float(_) => 1,
            FieldValue::Str(_) => 2,
        }
    }
}

impl Ord for FieldValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        use FieldValue::*;
        match (self, other) {
            (Str(a), Str(b)) => a.cmp(b),
            (Int(a), Int(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (Int(a), Float(b)) => (*a as f64).total_cmp(b),
            (Float(a), Int(b)) => a.total_cmp(&(*b as f64)),
            (Bool(a), Bool(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for FieldValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FieldValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue<'_> {}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Bool(b) => write!(f, "{b}"),
        }
    }
}
