//! bikemi-cli — Command-line interface for bikemi-core
//!
//! This binary merges the BikeMi open-data feed with the live availability
//! published on the stations page and lets you query the result from your
//! terminal. It supports printing network totals, listing (and sorting)
//! stations, searching by name or id, finding the nearest station to a
//! coordinate, and dumping every field of one station.
//!
//! Usage examples
//! --------------
//!
//! - Show network totals
//!   $ bikemi-cli stats
//!
//! - List all stations, fewest bikes first
//!   $ bikemi-cli list --sort bike
//!
//! - Search by name (accents, spaces and case don't matter) or id
//!   $ bikemi-cli find "piazza duomo"
//!   $ bikemi-cli find 417
//!
//! - Nearest station to a coordinate
//!   $ bikemi-cli nearest 45.4641 9.1919
//!
//! - Every field of one station, as JSON
//!   $ bikemi-cli --json show 417
//!
//! Data source
//! -----------
//!
//! By default both sources are fetched live. Use `--basic-file <path>` and
//! `--extra-file <path>` together to work from saved copies instead.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use bikemi_core::source::snapshot;
use bikemi_core::{distance_km, SearchHit, StationFull, StationSearch};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let stations = load_stations(&args)?;
    tracing::debug!(stations = stations.len(), command = ?args.command, "snapshot ready");

    match &args.command {
        Commands::Stats => {
            let stats = stations.stats();
            if args.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Network statistics:");
                println!("  Stations: {}", stats.stations);
                println!("  Bikes: {}", stats.bikes);
                println!("  E-bikes: {}", stats.ebikes);
                println!("  E-bikes with child seat: {}", stats.ebikes_with_childseat);
                println!("  Free docks: {}", stats.available_docks);
                println!("  Empty stations: {}", stats.empty_stations);
            }
        }

        Commands::List { sort } => {
            let listed = match sort {
                Some(key) => stations
                    .sorted_by(key)
                    .with_context(|| format!("cannot sort by `{key}`"))?,
                None => stations.clone(),
            };
            println!("{}", render_stations(listed.iter(), args.json)?);
        }

        Commands::Find { query } => {
            let hits = stations.find_stations(query).into_stations();
            println!("{}", render_find(hits, query, args.json)?);
        }

        Commands::Nearest { lat, lon } => {
            let station = stations.nearest_to(*lat, *lon)?;
            let km = distance_km(station, *lat, *lon);
            if args.json {
                println!("{}", serde_json::to_string_pretty(station)?);
            } else {
                println!("Nearest station ({km:.2} km):");
                println!("{}", summary(station));
            }
        }

        Commands::Show { station_id } => {
            println!("{}", render_show(&stations, station_id, args.json)?);
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_stations(args: &CliArgs) -> anyhow::Result<Vec<StationFull>> {
    if let (Some(basic), Some(extra)) = (&args.basic_file, &args.extra_file) {
        return snapshot::load_stations(basic, extra)
            .with_context(|| format!("loading snapshot {basic} + {extra}"));
    }
    fetch_live(args)
}

#[cfg(feature = "fetch")]
fn fetch_live(args: &CliArgs) -> anyhow::Result<Vec<StationFull>> {
    use bikemi_core::source::fetch;
    use bikemi_core::SourceConfig;
    use std::time::Duration;

    let mut config = SourceConfig::default();
    if let Some(url) = &args.info_url {
        config = config.with_station_information_url(url);
    }
    if let Some(url) = &args.stations_url {
        config = config.with_stations_page_url(url);
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    fetch::fetch_stations(&config).context("fetching live station data")
}

#[cfg(not(feature = "fetch"))]
fn fetch_live(_args: &CliArgs) -> anyhow::Result<Vec<StationFull>> {
    anyhow::bail!("built without the `fetch` feature: pass --basic-file and --extra-file")
}

fn summary(s: &StationFull) -> String {
    format!(
        "{:>5}  {}  bikes {}  e-bikes {}  child-seat {}  docks {}",
        s.station_id,
        s.title,
        s.bike,
        s.ebike,
        s.ebike_with_childseat,
        s.available_docks
    )
}

fn render_stations<'a>(
    stations: impl Iterator<Item = &'a StationFull>,
    json: bool,
) -> anyhow::Result<String> {
    if json {
        let all: Vec<&StationFull> = stations.collect();
        return Ok(serde_json::to_string_pretty(&all)?);
    }
    Ok(stations.map(summary).collect::<Vec<_>>().join("\n"))
}

/// A search that ran and matched nothing prints `null` in JSON mode, unlike
/// the `[]` of an empty listing.
fn render_find(
    hits: Option<Vec<&StationFull>>,
    query: &str,
    json: bool,
) -> anyhow::Result<String> {
    match hits {
        Some(hits) => render_stations(hits.into_iter(), json),
        None if json => Ok("null".to_owned()),
        None => Ok(format!("No stations found matching: {query}")),
    }
}

fn render_show(stations: &[StationFull], station_id: &str, json: bool) -> anyhow::Result<String> {
    let Some(s) = stations.find_by_id(station_id) else {
        anyhow::bail!("no station with id {station_id}");
    };
    if json {
        return Ok(serde_json::to_string_pretty(s)?);
    }
    Ok(s
        .fields()
        .into_iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stations() -> Vec<StationFull> {
        serde_json::from_value(serde_json::json!([{
            "station_id": "417", "name": "Viale Piave", "title": "Viale Piave - Tunisia",
            "lat": 45.47, "lon": 9.20, "bike": 3, "ebike": 1, "ebike_with_childseat": 0,
            "availableDocks": 12, "availableVirtualDocks": 0, "availablePhysicalDocks": 12
        }]))
        .unwrap()
    }

    #[test]
    fn find_without_match_is_null_in_json() {
        let s = stations();
        let none = s.find_stations("Navigli").into_stations();
        assert_eq!(render_find(none, "Navigli", true).unwrap(), "null");
        let none = s.find_stations("Navigli").into_stations();
        assert_eq!(
            render_find(none, "Navigli", false).unwrap(),
            "No stations found matching: Navigli"
        );
        // An empty listing is still an array.
        assert_eq!(render_stations(std::iter::empty(), true).unwrap(), "[]");
    }

    #[test]
    fn find_with_match_lists_stations() {
        let s = stations();
        let hits = s.find_stations("piave").into_stations();
        let out = render_find(hits, "piave", true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v[0]["station_id"], "417");
    }

    #[test]
    fn show_unknown_id_is_an_error() {
        let s = stations();
        assert!(render_show(&s, "999", false).is_err());
        assert!(render_show(&s, "417", false)
            .unwrap()
            .contains("title: Viale Piave - Tunisia"));
    }
}
