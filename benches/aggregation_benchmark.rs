use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use idf_rail_dashboard::analyzers::{
    count_by_category, lines_by_mode, top_cities_by_traffic, top_stations_by_traffic,
    top_stations_for_network,
};
use idf_rail_dashboard::models::{GareColumn, GareRecord, StationRecord};
use idf_rail_dashboard::processors::GeoProjector;

const NETWORKS: [&str; 3] = ["Métro", "RER", "Ferré"];
const MODES: [&str; 4] = ["RER", "METRO", "TRAIN", "TRAMWAY"];
const OPERATORS: [&str; 2] = ["RATP", "SNCF"];

// Create test data for benchmarking
fn create_test_data(count: usize) -> (Vec<StationRecord>, Vec<GareRecord>) {
    let mut stations = Vec::with_capacity(count);
    let mut gares = Vec::with_capacity(count);

    for i in 0..count {
        stations.push(StationRecord {
            station: format!("Station {}", i),
            city: format!("Ville {}", i % 40),
            network: NETWORKS[i % NETWORKS.len()].to_string(),
            traffic: ((i as u64) * 7_919) % 30_000_000,
        });

        let geo_point = if i % 50 == 0 {
            "bad,data".to_string()
        } else {
            format!(
                "{:.5}, {:.5}",
                48.6 + (i as f64 % 60.0) * 0.01,
                2.0 + (i as f64 % 90.0) * 0.01
            )
        };
        gares.push(GareRecord::new(
            OPERATORS[i % OPERATORS.len()].to_string(),
            format!("{}", i % 25),
            MODES[i % MODES.len()].to_string(),
            format!("Gare {}", i),
            geo_point,
        ));
    }

    (stations, gares)
}

fn benchmark_traffic_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("traffic_views");

    for count in [1_000, 10_000, 100_000] {
        let (stations, _) = create_test_data(count);

        group.bench_with_input(BenchmarkId::new("top_stations", count), &stations, |b, s| {
            b.iter(|| top_stations_by_traffic(black_box(s), 10))
        });
        group.bench_with_input(BenchmarkId::new("top_cities", count), &stations, |b, s| {
            b.iter(|| top_cities_by_traffic(black_box(s), 5))
        });
        group.bench_with_input(
            BenchmarkId::new("top_stations_for_network", count),
            &stations,
            |b, s| b.iter(|| top_stations_for_network(black_box(s), "Métro", 10)),
        );
    }

    group.finish();
}

fn benchmark_gare_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("gare_views");

    for count in [1_000, 10_000, 100_000] {
        let (_, gares) = create_test_data(count);

        group.bench_with_input(BenchmarkId::new("count_by_line", count), &gares, |b, g| {
            b.iter(|| count_by_category(black_box(g), GareColumn::Line))
        });
        group.bench_with_input(BenchmarkId::new("lines_by_mode", count), &gares, |b, g| {
            b.iter(|| lines_by_mode(black_box(g), "RER"))
        });
        group.bench_with_input(BenchmarkId::new("to_points", count), &gares, |b, g| {
            let projector = GeoProjector::new();
            b.iter(|| projector.to_points(black_box(g)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_traffic_views, benchmark_gare_views);
criterion_main!(benches);
