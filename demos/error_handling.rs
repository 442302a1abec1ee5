//! Error handling example for bikemi-rs
//!
//! This example demonstrates the failure modes of the merge and query layer

use bikemi_rs::prelude::*;

fn station(id: &str) -> (StationBasic, StationExtra) {
    let basic = StationBasic {
        station_id: id.into(),
        name: format!("Station {id}"),
        lat: 45.46,
        lon: 9.19,
        address: None,
        capacity: None,
        other: Default::default(),
    };
    let extra = StationExtra {
        station_id: id.into(),
        name: None,
        title: None,
        bike: 1,
        ebike: 0,
        ebike_with_childseat: 0,
        available_docks: 5,
        available_virtual_docks: 0,
        available_physical_docks: 5,
    };
    (basic, extra)
}

fn main() -> Result<()> {
    println!("=== bikemi-rs Error Handling Example ===\n");

    let (b1, e1) = station("1");
    let (b2, _) = station("2");
    let (_, e3) = station("3");

    // Example 1: Sources that disagree on the number of stations
    println!("--- Example 1: Length mismatch ---");
    match merge(&[b1.clone(), b2.clone()], &[e1.clone()]) {
        Ok(_) => println!("  unexpectedly merged"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    // Example 2: Same count, different stations
    println!("--- Example 2: Id mismatch ---");
    match merge(&[b1.clone(), b2], &[e1.clone(), e3]) {
        Ok(_) => println!("  unexpectedly merged"),
        Err(e) => println!("  ✗ {e}"),
    }
    println!();

    let stations = merge(&[b1], &[e1])?;

    // Example 3: Sorting by a field that does not exist
    println!("--- Example 3: Unknown sort key ---");
    if let Err(e) = sort(&stations, "altitude") {
        println!("  ✗ {e}");
    }
    println!();

    // Example 4: Nearest over nothing
    println!("--- Example 4: Nearest on an empty list ---");
    if let Err(e) = nearest(&[], 45.46, 9.19) {
        println!("  ✗ {e}");
    }
    println!();

    // Example 5: "No match" is a result, not an error
    println!("--- Example 5: Search without results ---");
    let hits: Vec<_> = find(&stations, "Navigli").collect();
    println!("  {hits:?}");

    Ok(())
}
