// crates/bikemi-core/src/source/mod.rs

//! # Station Sources
//!
//! Produces the two partial station shapes the reconciler consumes:
//! [`open_data`] decodes the GBFS feed, [`scrape`] decodes the availability
//! map embedded in the stations page. [`snapshot`] reads either from disk,
//! and `fetch` (feature `fetch`) downloads them.

use serde::Deserialize;
use std::time::Duration;

pub mod open_data;
pub mod scrape;
pub mod snapshot;

#[cfg(feature = "fetch")]
pub mod fetch;

pub const STATION_INFORMATION_URL: &str =
    "https://gbfs.urbansharing.com/bikemi.com/station_information.json";

pub const STATIONS_PAGE_URL: &str = "https://bikemi.com/stazioni";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_USER_AGENT: &str = concat!("bikemi-core/", env!("CARGO_PKG_VERSION"));

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

/// Where the two sources live and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub station_information_url: String,
    pub stations_page_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            station_information_url: STATION_INFORMATION_URL.to_owned(),
            stations_page_url: STATIONS_PAGE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }
}

impl SourceConfig {
    pub fn with_station_information_url(mut self, url: impl Into<String>) -> Self {
        self.station_information_url = url.into();
        self
    }

    pub fn with_stations_page_url(mut self, url: impl Into<String>) -> Self {
        self.stations_page_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// -----------------------------------------------------------------------------
// SHARED RAW TYPES
// -----------------------------------------------------------------------------

/// Station ids show up as JSON strings or numbers depending on the source.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum IdRaw {
    Text(String),
    Number(serde_json::Number),
}

impl IdRaw {
    pub(crate) fn into_string(self) -> String {
        match self {
            IdRaw::Text(s) => s,
            IdRaw::Number(n) => n.to_string(),
        }
    }
}
