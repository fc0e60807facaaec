use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{Error, Result};

/// Display coordinates of a place. Only used by renderers, never by searches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position(pub f64, pub f64);

/// Raw `[a, b, time]` street tuple as it appears in the map document.
///
/// The time is kept as an untyped JSON value so that a non-numeric entry is
/// reported as an invalid weight rather than a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, String, Value)", into = "(String, String, Value)")]
pub struct StreetRecord {
    pub a: String,
    pub b: String,
    pub time: Value,
}

impl StreetRecord {
    pub fn new(a: impl Into<String>, b: impl Into<String>, time: impl Into<Value>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            time: time.into(),
        }
    }
}

impl From<(String, String, Value)> for StreetRecord {
    fn from((a, b, time): (String, String, Value)) -> Self {
        Self { a, b, time }
    }
}

impl From<StreetRecord> for (String, String, Value) {
    fn from(record: StreetRecord) -> Self {
        (record.a, record.b, record.time)
    }
}

/// City map input document: named places with display coordinates plus the
/// ordered list of streets joining them. Places keep their document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CityMap {
    #[serde(rename = "nodes", alias = "nodos")]
    pub places: IndexMap<String, Position>,
    #[serde(rename = "calles", alias = "streets", alias = "edges")]
    pub streets: Vec<StreetRecord>,
}

impl CityMap {
    /// Parse a map document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::malformed)
    }

    /// Display position of a place, if the map defines one.
    pub fn position(&self, label: &str) -> Option<Position> {
        self.places.get(label).copied()
    }
}

/// Load a city map document from disk.
pub fn load_city_map(path: &Path) -> Result<CityMap> {
    let text = fs::read_to_string(path)?;
    let map = CityMap::from_json_str(&text)?;
    debug!(
        path = %path.display(),
        places = map.places.len(),
        streets = map.streets.len(),
        "loaded city map"
    );
    Ok(map)
}
