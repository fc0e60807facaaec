use criterion::{criterion_group, criterion_main, Criterion};
use cityroute_lib::{
    all_shortest_paths, build_graph, fastest_path, find_any_path, load_city_map, Graph,
};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/city.json")
}

static CITY: Lazy<Graph> = Lazy::new(|| {
    let map = load_city_map(&fixture_path()).expect("fixture loads");
    build_graph(&map).expect("fixture graph builds")
});

/// 12x12 unit lattice: corner to corner has C(22, 11) tied routes, far above the cap.
static LATTICE: Lazy<Graph> = Lazy::new(|| {
    let size = 12;
    let label = |row: usize, col: usize| format!("r{row}c{col}");
    let mut nodes = Vec::new();
    let mut streets = Vec::new();
    for row in 0..size {
        for col in 0..size {
            nodes.push(label(row, col));
            if col + 1 < size {
                streets.push((label(row, col), label(row, col + 1), 1.0));
            }
            if row + 1 < size {
                streets.push((label(row, col), label(row + 1, col), 1.0));
            }
        }
    }
    Graph::build(nodes, streets).expect("lattice builds")
});

fn benchmark_pathfinding(c: &mut Criterion) {
    let city = &*CITY;
    let lattice = &*LATTICE;

    c.bench_function("fastest_hotel_school", |b| {
        b.iter(|| {
            let route = fastest_path(city, "Hotel", "School").expect("route exists");
            black_box(route.cost)
        });
    });

    c.bench_function("tied_bank_library", |b| {
        b.iter(|| {
            let set = all_shortest_paths(city, "Bank", "Library", 1000).expect("routes exist");
            black_box(set.len())
        });
    });

    c.bench_function("tied_lattice_capped", |b| {
        b.iter(|| {
            let set = all_shortest_paths(lattice, "r0c0", "r11c11", 1000).expect("routes exist");
            black_box(set.truncated)
        });
    });

    c.bench_function("reachability_hotel_school", |b| {
        b.iter(|| {
            let path = find_any_path(city, "Hotel", "School").expect("known places");
            black_box(path.map(|p| p.hop_count()))
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
