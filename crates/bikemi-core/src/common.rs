// crates/bikemi-core/src/common.rs

use crate::model::StationFull;
use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a merged snapshot.
///
/// Returned by [`crate::StationSearch::stats`], these totals reflect the
/// live availability at the time the snapshot was scraped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationStats {
    pub stations: usize,
    pub bikes: u64,
    pub ebikes: u64,
    pub ebikes_with_childseat: u64,
    pub available_docks: u64,
    /// Stations with no vehicle of any kind.
    pub empty_stations: usize,
}

impl StationStats {
    pub fn collect(stations: &[StationFull]) -> Self {
        stations.iter().fold(Self::default(), |mut acc, s| {
            acc.stations += 1;
            acc.bikes += u64::from(s.bike);
            acc.ebikes += u64::from(s.ebike);
            acc.ebikes_with_childseat += u64::from(s.ebike_with_childseat);
            acc.available_docks += u64::from(s.available_docks);
            if s.vehicles() == 0 {
                acc.empty_stations += 1;
            }
            acc
        })
    }
}
