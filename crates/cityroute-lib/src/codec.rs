//! JSON and GeoJSON persistence for street graphs.
//!
//! The graph document has the shape
//! `{"nodes": [label, ...], "edges": [{"u": a, "v": b, "time": t}, ...]}` and
//! round-trips through [`to_json`] / [`from_json`]. The GeoJSON export is
//! write-only: street features carry the endpoint labels as their
//! coordinates and place features carry the label itself, so consumers must
//! resolve labels to positions on their side.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{parse_time, Graph};

/// Serialisable form of a [`Graph`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(alias = "nodos")]
    pub nodes: Vec<String>,
    #[serde(alias = "aristas")]
    pub edges: Vec<EdgeRecord>,
}

/// One street in a [`GraphDocument`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub u: String,
    pub v: String,
    #[serde(alias = "tiempo")]
    pub time: Value,
}

/// GeoJSON `FeatureCollection`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<Feature>,
}

/// GeoJSON `Feature` with free-form properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

impl Feature {
    fn new(geometry: Geometry, properties: Map<String, Value>) -> Self {
        Self {
            kind: "Feature",
            geometry,
            properties,
        }
    }
}

/// Geometry of an exported feature. Coordinates are place labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: [String; 2] },
    Point { coordinates: String },
}

/// Convert a graph into its JSON document form.
pub fn to_json(graph: &Graph) -> GraphDocument {
    GraphDocument {
        nodes: graph.nodes().map(str::to_string).collect(),
        edges: graph
            .edges()
            .map(|street| EdgeRecord {
                u: street.a.to_string(),
                v: street.b.to_string(),
                time: Value::from(street.time),
            })
            .collect(),
    }
}

/// Parse a graph document from JSON text.
pub fn from_json(text: &str) -> Result<Graph> {
    let document: GraphDocument = serde_json::from_str(text).map_err(Error::malformed)?;
    from_document(&document)
}

/// Rebuild a graph from a parsed document, with the same ingestion rules as
/// [`Graph::build`].
pub fn from_document(document: &GraphDocument) -> Result<Graph> {
    let known: HashSet<&str> = document.nodes.iter().map(String::as_str).collect();
    let mut streets = Vec::with_capacity(document.edges.len());
    for record in &document.edges {
        if !known.contains(record.u.as_str()) || !known.contains(record.v.as_str()) {
            continue;
        }
        let time = parse_time(&record.u, &record.v, &record.time)?;
        streets.push((record.u.as_str(), record.v.as_str(), time));
    }
    Graph::build(document.nodes.iter().cloned(), streets)
}

/// Export a graph as a GeoJSON feature collection: one `LineString` per
/// street followed by one `Point` per place.
pub fn to_geojson(graph: &Graph) -> FeatureCollection {
    let streets = graph.edges().map(|street| {
        let mut properties = Map::new();
        properties.insert("time".to_string(), Value::from(street.time));
        Feature::new(
            Geometry::LineString {
                coordinates: [street.a.to_string(), street.b.to_string()],
            },
            properties,
        )
    });
    let places = graph.nodes().map(|label| {
        Feature::new(
            Geometry::Point {
                coordinates: label.to_string(),
            },
            Map::new(),
        )
    });

    FeatureCollection {
        kind: "FeatureCollection",
        features: streets.chain(places).collect(),
    }
}

/// Write the compact JSON graph document to `path`.
pub fn write_json(graph: &Graph, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &to_json(graph))?;
    writer.flush()?;
    debug!(path = %path.display(), "wrote graph document");
    Ok(())
}

/// Read a JSON graph document from `path`.
pub fn read_json(path: &Path) -> Result<Graph> {
    let text = std::fs::read_to_string(path)?;
    from_json(&text)
}

/// Write the pretty-printed GeoJSON export to `path`.
pub fn write_geojson(graph: &Graph, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &to_geojson(graph))?;
    writer.flush()?;
    debug!(path = %path.display(), "wrote geojson export");
    Ok(())
}
