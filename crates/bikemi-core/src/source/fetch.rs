// crates/bikemi-core/src/source/fetch.rs
#![cfg(feature = "fetch")]

//! Blocking download of both sources.

use super::{open_data, scrape, SourceConfig};
use crate::error::Result;
use crate::model::{StationBasic, StationExtra, StationFull};
use crate::reconcile::merge;
use reqwest::blocking::Client;
use tracing::{debug, info};

fn client(config: &SourceConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Download and decode the open-data feed.
pub fn fetch_station_basic(config: &SourceConfig) -> Result<Vec<StationBasic>> {
    fetch_station_basic_with(&client(config)?, config)
}

/// Download the stations page and decode its availability map.
pub fn fetch_station_extra(config: &SourceConfig) -> Result<Vec<StationExtra>> {
    fetch_station_extra_with(&client(config)?, config)
}

/// Download both sources and merge them.
pub fn fetch_stations(config: &SourceConfig) -> Result<Vec<StationFull>> {
    let client = client(config)?;
    let basic = fetch_station_basic_with(&client, config)?;
    let extra = fetch_station_extra_with(&client, config)?;
    let stations = merge(&basic, &extra)?;
    info!(stations = stations.len(), "fetched live station data");
    Ok(stations)
}

fn fetch_station_basic_with(client: &Client, config: &SourceConfig) -> Result<Vec<StationBasic>> {
    let url = &config.station_information_url;
    debug!(%url, "fetching open-data feed");
    let resp = client.get(url).send()?.error_for_status()?;
    open_data::parse_station_information(resp)
}

fn fetch_station_extra_with(client: &Client, config: &SourceConfig) -> Result<Vec<StationExtra>> {
    let url = &config.stations_page_url;
    debug!(%url, "fetching stations page");
    let html = client.get(url).send()?.error_for_status()?.text()?;
    scrape::parse_station_extra(&html)
}
