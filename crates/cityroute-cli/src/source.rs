//! Resolution of the street graph the CLI operates on.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use cityroute_lib::codec::read_json;
use cityroute_lib::{build_graph, load_city_map, Graph};

/// Where the street graph is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphSource {
    /// City map document with place coordinates and `calles`.
    Map(PathBuf),
    /// Graph document previously written by `export --as json`.
    Graph(PathBuf),
}

impl GraphSource {
    /// Pick a source from the `--map` / `--graph` options.
    pub fn from_options(map: Option<&Path>, graph: Option<&Path>) -> Result<Self> {
        match (map, graph) {
            (Some(_), Some(_)) => bail!("--map and --graph cannot be combined"),
            (Some(map), None) => Ok(GraphSource::Map(map.to_path_buf())),
            (None, Some(graph)) => Ok(GraphSource::Graph(graph.to_path_buf())),
            (None, None) => bail!("no street data given; pass --map <FILE> or set CITYROUTE_MAP"),
        }
    }

    /// Load and build the graph.
    pub fn load(&self) -> Result<Graph> {
        let graph = match self {
            GraphSource::Map(path) => {
                let map = load_city_map(path)
                    .with_context(|| format!("failed to load city map from {}", path.display()))?;
                build_graph(&map)
                    .with_context(|| format!("invalid street data in {}", path.display()))?
            }
            GraphSource::Graph(path) => read_json(path)
                .with_context(|| format!("failed to load graph from {}", path.display()))?,
        };
        info!(
            places = graph.node_count(),
            streets = graph.edge_count(),
            "street graph ready"
        );
        Ok(graph)
    }
}
