// crates/bikemi-core/src/search.rs

//! # Station Search
//!
//! Fuzzy lookup by display name or station id. The result is a lazy,
//! single-pass iterator that always says something: either the matching
//! stations, or exactly one [`SearchHit::NoMatch`].

use crate::model::StationFull;
use crate::text::fold_key;
use crate::traits::NameMatch;
use regex::{Regex, RegexBuilder};
use std::iter::FusedIterator;

/// One item produced by [`find`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchHit<'a> {
    Station(&'a StationFull),
    /// The search ran and nothing matched. Only ever yielded alone.
    NoMatch,
}

impl<'a> SearchHit<'a> {
    pub fn station(self) -> Option<&'a StationFull> {
        match self {
            SearchHit::Station(s) => Some(s),
            SearchHit::NoMatch => None,
        }
    }
}

/// How the raw query is tested against a station id.
#[derive(Debug)]
enum IdPattern {
    Regex(Regex),
    /// Fallback for queries that are not valid patterns; lowercase.
    Literal(String),
}

impl IdPattern {
    fn new(raw: &str) -> Self {
        match RegexBuilder::new(raw).case_insensitive(true).build() {
            Ok(re) => IdPattern::Regex(re),
            Err(_) => IdPattern::Literal(raw.to_lowercase()),
        }
    }

    fn is_match(&self, station_id: &str) -> bool {
        match self {
            IdPattern::Regex(re) => re.is_match(station_id),
            IdPattern::Literal(q) => station_id.to_lowercase().contains(q.as_str()),
        }
    }
}

#[derive(Debug)]
struct Query {
    folded: String,
    id: IdPattern,
}

impl Query {
    fn matches(&self, station: &StationFull) -> bool {
        station.matches_folded(&self.folded) || self.id.is_match(&station.station_id)
    }
}

/// Iterator returned by [`find`].
#[derive(Debug)]
pub struct Matches<'a> {
    stations: std::slice::Iter<'a, StationFull>,
    /// `None` when the query folds to nothing: match nothing.
    query: Option<Query>,
    found: bool,
    done: bool,
}

impl<'a> Matches<'a> {
    /// Drain the search. `None` means it ran and found nothing.
    pub fn into_stations(self) -> Option<Vec<&'a StationFull>> {
        let hits: Vec<&StationFull> = self.filter_map(SearchHit::station).collect();
        if hits.is_empty() {
            None
        } else {
            Some(hits)
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = SearchHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(query) = &self.query {
            for station in self.stations.by_ref() {
                if query.matches(station) {
                    self.found = true;
                    return Some(SearchHit::Station(station));
                }
            }
        }
        self.done = true;
        if self.found {
            None
        } else {
            Some(SearchHit::NoMatch)
        }
    }
}

impl FusedIterator for Matches<'_> {}

/// Search stations by display name or id.
///
/// The query and each title are reduced with [`fold_key`] (accents and
/// punctuation dropped) and compared case-insensitively as substrings. The
/// raw query is also tried as a case-insensitive pattern against the raw
/// `station_id`. A query with no letters or digits matches nothing.
///
/// ```rust
/// use bikemi_core::{find, SearchHit, StationFull};
///
/// # let s: StationFull = serde_json::from_str(r#"{"station_id":"101","name":"p","title":"Viale Piave",
/// #   "lat":45.47,"lon":9.20,"bike":1,"ebike":0,"ebike_with_childseat":0,
/// #   "availableDocks":1,"availableVirtualDocks":0,"availablePhysicalDocks":1}"#).unwrap();
/// let stations = vec![s];
/// let hits: Vec<_> = find(&stations, "viale piàve").collect();
/// assert_eq!(hits, vec![SearchHit::Station(&stations[0])]);
///
/// let none: Vec<_> = find(&stations, "Loreto").collect();
/// assert_eq!(none, vec![SearchHit::NoMatch]);
/// ```
pub fn find<'a>(stations: &'a [StationFull], query: &str) -> Matches<'a> {
    let folded = fold_key(query);
    let query = (!folded.is_empty()).then(|| Query {
        folded,
        id: IdPattern::new(query),
    });
    Matches {
        stations: stations.iter(),
        query,
        found: false,
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: &str, title: &str) -> StationFull {
        StationFull {
            station_id: id.into(),
            name: title.to_lowercase(),
            title: title.into(),
            lat: 45.46,
            lon: 9.19,
            address: None,
            capacity: None,
            bike: 0,
            ebike: 0,
            ebike_with_childseat: 0,
            available_docks: 0,
            available_virtual_docks: 0,
            available_physical_docks: 0,
            other: Default::default(),
        }
    }

    fn milan() -> Vec<StationFull> {
        vec![
            station("101", "Viale Piave"),
            station("202", "Piazza Duomo"),
            station("303", "Città Studi"),
            station("A12", "Porta Venezia"),
        ]
    }

    fn ids<'a>(hits: impl Iterator<Item = SearchHit<'a>>) -> Vec<&'a str> {
        hits.filter_map(SearchHit::station)
            .map(|s| s.station_id.as_str())
            .collect()
    }

    #[test]
    fn diacritics_and_spaces_are_ignored() {
        let s = milan();
        assert_eq!(ids(find(&s, "Viale Piàve ")), vec!["101"]);
        assert_eq!(ids(find(&s, "CITTA-STUDI")), vec!["303"]);
    }

    #[test]
    fn unique_substring_yields_exactly_that_station() {
        let s = milan();
        let hits: Vec<_> = find(&s, "uom").collect();
        assert_eq!(hits, vec![SearchHit::Station(&s[1])]);
    }

    #[test]
    fn matches_keep_source_order_without_marker() {
        let s = milan();
        // "pia" hits both Viale Piave and Piazza Duomo.
        let hits: Vec<_> = find(&s, "pia").collect();
        assert_eq!(hits.len(), 2);
        assert!(!hits.contains(&SearchHit::NoMatch));
        assert_eq!(ids(hits.into_iter()), vec!["101", "202"]);
    }

    #[test]
    fn empty_query_yields_no_match_marker() {
        let s = milan();
        assert_eq!(find(&s, "").collect::<Vec<_>>(), vec![SearchHit::NoMatch]);
        assert_eq!(find(&s, " -!").collect::<Vec<_>>(), vec![SearchHit::NoMatch]);
    }

    #[test]
    fn no_match_is_a_single_marker() {
        let s = milan();
        let mut it = find(&s, "Navigli");
        assert_eq!(it.next(), Some(SearchHit::NoMatch));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn empty_station_list_still_reports_no_match() {
        assert_eq!(find(&[], "Duomo").collect::<Vec<_>>(), vec![SearchHit::NoMatch]);
    }

    #[test]
    fn raw_query_matches_station_id() {
        let s = milan();
        assert_eq!(ids(find(&s, "a12")), vec!["A12"]);
        assert_eq!(ids(find(&s, "^30")), vec!["303"]);
    }

    #[test]
    fn invalid_pattern_falls_back_to_literal() {
        let mut s = milan();
        s.push(station("X(1", "Somewhere"));
        assert_eq!(ids(find(&s, "x(1")), vec!["X(1"]);
    }

    #[test]
    fn into_stations_distinguishes_found_none() {
        let s = milan();
        assert!(find(&s, "Navigli").into_stations().is_none());
        assert_eq!(find(&s, "duomo").into_stations().map(|v| v.len()), Some(1));
    }
}
