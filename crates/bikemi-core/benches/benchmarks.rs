use bikemi_core::{find, nearest, sort, StationFull};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

const TITLES: &[&str] = &[
    "Piazza del Duomo",
    "Viale Piàve",
    "Città Studi",
    "Porta Venezia",
    "Cadorna Ferrovie Nord",
    "Corso di Porta Ticinese",
    "Stazione Centrale",
    "Piazzale Loreto",
];

/// Roughly the size of the real network, spread over the city.
fn synthetic_network(n: usize) -> Vec<StationFull> {
    (0..n)
        .map(|i| {
            let f = i as f64 / n as f64;
            StationFull {
                station_id: i.to_string(),
                name: format!("{i:03}"),
                title: format!("{} {}", TITLES[i % TITLES.len()], i),
                lat: 45.42 + 0.1 * f,
                lon: 9.12 + 0.15 * ((i * 7919) % n) as f64 / n as f64,
                address: None,
                capacity: Some(20 + (i % 15) as u32),
                bike: (i % 11) as u32,
                ebike: (i % 5) as u32,
                ebike_with_childseat: (i % 2) as u32,
                available_docks: (i % 17) as u32,
                available_virtual_docks: 0,
                available_physical_docks: (i % 17) as u32,
                other: Default::default(),
            }
        })
        .collect()
}

fn bench_queries(c: &mut Criterion) {
    let stations = synthetic_network(320);

    c.bench_function("find_by_title", |b| {
        b.iter(|| find(black_box(&stations), black_box("porta venèzia")).count())
    });

    c.bench_function("find_no_match", |b| {
        b.iter(|| find(black_box(&stations), black_box("Navigli")).count())
    });

    c.bench_function("sort_by_bike", |b| {
        b.iter(|| sort(black_box(&stations), black_box("bike")).map(|v| v.len()))
    });

    c.bench_function("nearest_geodesic", |b| {
        b.iter(|| {
            nearest(black_box(&stations), black_box(45.4641), black_box(9.1919))
                .map(|s| s.station_id.len())
        })
    });
}

criterion_group!(benches, bench_queries);
criterion_main!(benches);
