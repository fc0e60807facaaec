//! cityroute library entry points.
//!
//! This crate models a city's street network as a weighted undirected graph
//! of named places and answers routing queries over it: the fastest path
//! between two places, every path tied for the fastest travel time, and a
//! plain reachability search. Front ends (the CLI, or anything else that
//! renders maps) should only depend on the functions exported here and never
//! reach into graph internals.

#![deny(warnings)]

pub mod codec;
pub mod error;
pub mod graph;
pub mod map;
pub mod output;
pub mod path;
pub mod reachability;

pub use codec::{from_json, to_geojson, to_json, FeatureCollection, GraphDocument};
pub use error::{Error, Result};
pub use graph::{build_graph, Graph, Street};
pub use map::{load_city_map, CityMap, Position, StreetRecord};
pub use output::{RouteOutputKind, RouteRenderMode, RouteSummary};
pub use path::{
    all_shortest_paths, all_shortest_paths_with, fastest_path, shortest_distances, Path, PathSet,
    SearchOptions, ShortestPath, DEFAULT_PATH_LIMIT,
};
pub use reachability::{connected, find_any_path};
