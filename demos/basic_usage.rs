//! Basic usage example for bikemi-rs
//!
//! This example demonstrates how to:
//! - Load and merge a saved snapshot of both sources
//! - Search stations by name and by id
//! - Sort by live availability
//! - Find the station nearest to a coordinate

use bikemi_rs::prelude::*;

const BASIC: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/crates/bikemi-core/tests/fixtures/station_information.json"
);
const EXTRA: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/crates/bikemi-core/tests/fixtures/stazioni.html"
);

fn main() -> Result<()> {
    println!("=== bikemi-rs Basic Usage Example ===\n");

    println!("Loading station snapshot...");
    let stations = load_stations(BASIC, EXTRA)?;
    println!("✓ {} stations merged\n", stations.len());

    // Example 1: Search by name
    println!("--- Example 1: Search by name ---");
    for hit in find(&stations, "viale piave") {
        match hit {
            SearchHit::Station(s) => println!("Found: {} ({})", s.title(), s.station_id()),
            SearchHit::NoMatch => println!("No station matches"),
        }
    }
    println!();

    // Example 2: Search by id
    println!("--- Example 2: Search by id ---");
    if let Some(hits) = find(&stations, "88").into_stations() {
        for s in hits {
            println!("{}: {} bikes, {} e-bikes", s.title(), s.bike, s.ebike);
        }
    }
    println!();

    // Example 3: Sort by available bikes
    println!("--- Example 3: Fewest bikes first ---");
    for s in sort(&stations, "bike")? {
        println!("{:>3} bikes  {}", s.bike, s.title());
    }
    println!();

    // Example 4: Nearest station
    println!("--- Example 4: Nearest station to Piazza della Scala ---");
    let (lat, lon) = (45.4674, 9.1897);
    let s = nearest(&stations, lat, lon)?;
    println!("{} at {:.2} km", s.title(), distance_km(s, lat, lon));

    Ok(())
}
