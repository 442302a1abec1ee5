// crates/bikemi-core/src/traits.rs

use crate::common::StationStats;
use crate::error::Result;
use crate::model::StationFull;
use crate::query;
use crate::search::{self, Matches};
use crate::text::{contains_folded, fold_key};

/// Name-based matching helpers for types that expose a display name.
///
/// This trait centralizes accent-insensitive, punctuation-insensitive and
/// case-insensitive comparisons based on [`fold_key`]. Implementors provide
/// a `&str` view of their display name via [`NameMatch::name_str`].
///
/// # Examples
/// ```rust
/// use bikemi_core::traits::NameMatch;
///
/// struct Dock(&'static str);
/// impl NameMatch for Dock {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Dock("Città Studi").name_contains("citta stu"));
/// assert!(!Dock("Città Studi").name_contains("   "));
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Substring test against a query that has already been through
    /// [`fold_key`].
    #[inline]
    fn matches_folded(&self, folded_query: &str) -> bool {
        contains_folded(&fold_key(self.name_str()), folded_query)
    }

    /// Accent-insensitive + case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.matches_folded(&fold_key(q))
    }
}

impl NameMatch for StationFull {
    fn name_str(&self) -> &str {
        &self.title
    }
}

/// The query operations available on a merged station snapshot.
///
/// Implemented for `[StationFull]`, so any `Vec<StationFull>` gets them
/// too.
///
/// ```rust
/// use bikemi_core::StationSearch;
/// # use bikemi_core::StationFull;
/// # let stations: Vec<StationFull> = Vec::new();
/// assert!(stations.nearest_to(45.46, 9.19).is_err());
/// ```
pub trait StationSearch {
    fn stats(&self) -> StationStats;

    /// Exact, case-insensitive lookup by `station_id`.
    fn find_by_id(&self, station_id: &str) -> Option<&StationFull>;

    /// See [`search::find`].
    fn find_stations(&self, query: &str) -> Matches<'_>;

    /// See [`query::sort`].
    fn sorted_by(&self, key: &str) -> Result<Vec<StationFull>>;

    /// See [`query::nearest`].
    fn nearest_to(&self, lat: f64, lon: f64) -> Result<&StationFull>;
}

impl StationSearch for [StationFull] {
    fn stats(&self) -> StationStats {
        StationStats::collect(self)
    }

    fn find_by_id(&self, station_id: &str) -> Option<&StationFull> {
        let station_id = station_id.trim();
        self.iter()
            .find(|s| s.station_id.eq_ignore_ascii_case(station_id))
    }

    fn find_stations(&self, query: &str) -> Matches<'_> {
        search::find(self, query)
    }

    fn sorted_by(&self, key: &str) -> Result<Vec<StationFull>> {
        query::sort(self, key)
    }

    fn nearest_to(&self, lat: f64, lon: f64) -> Result<&StationFull> {
        query::nearest(self, lat, lon)
    }
}
