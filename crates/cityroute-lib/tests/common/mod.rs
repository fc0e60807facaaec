#![allow(dead_code)]

use std::path::PathBuf;

use cityroute_lib::{build_graph, load_city_map, Graph};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn city_graph() -> Graph {
    let map = load_city_map(&fixtures_dir().join("city.json")).expect("fixture map loads");
    build_graph(&map).expect("fixture graph builds")
}

/// Four places where A -> C ties between the direct street and the detour via B.
pub fn diamond_graph() -> Graph {
    Graph::build(
        ["A", "B", "C", "D"],
        [("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 2.0), ("C", "D", 1.0)],
    )
    .expect("diamond graph builds")
}

/// Two components: {A, B} and {X, Y}.
pub fn split_graph() -> Graph {
    Graph::build(["A", "B", "X", "Y"], [("A", "B", 1.0), ("X", "Y", 1.0)])
        .expect("split graph builds")
}

/// `width` x `height` lattice with unit streets, labelled `r{row}c{col}`.
/// Corner to corner has C(w+h-2, w-1) tied fastest routes.
pub fn lattice_graph(width: usize, height: usize) -> Graph {
    let label = |row: usize, col: usize| format!("r{row}c{col}");
    let mut nodes = Vec::new();
    let mut streets = Vec::new();
    for row in 0..height {
        for col in 0..width {
            nodes.push(label(row, col));
            if col + 1 < width {
                streets.push((label(row, col), label(row, col + 1), 1.0));
            }
            if row + 1 < height {
                streets.push((label(row, col), label(row + 1, col), 1.0));
            }
        }
    }
    Graph::build(nodes, streets).expect("lattice builds")
}
