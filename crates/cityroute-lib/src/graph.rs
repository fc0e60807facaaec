use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::map::CityMap;

/// Minimum similarity score for a label to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Dense index of a place inside a [`Graph`].
pub(crate) type NodeIndex = usize;

/// Street entry scoped to a single endpoint's adjacency list.
#[derive(Debug, Clone, Copy)]
struct Adjacent {
    target: NodeIndex,
    street: usize,
}

#[derive(Debug, Clone)]
struct StreetEntry {
    a: NodeIndex,
    b: NodeIndex,
    time: f64,
}

/// Borrowed view of a street as returned by [`Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Street<'a> {
    pub a: &'a str,
    pub b: &'a str,
    pub time: f64,
}

#[derive(Debug, Default)]
struct GraphData {
    labels: Vec<String>,
    index: HashMap<String, NodeIndex>,
    streets: Vec<StreetEntry>,
    adjacency: Vec<Vec<Adjacent>>,
}

/// Undirected street network keyed by place label.
///
/// Places keep the order in which they were first supplied and every
/// adjacency list keeps the order in which its streets were first declared.
/// Searches expand neighbours in that order, which is what makes their
/// results reproducible. The graph is immutable once built; clones share the
/// same underlying storage.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    data: Arc<GraphData>,
}

impl Graph {
    /// Build a graph from a set of place labels and a list of streets.
    ///
    /// Streets whose endpoints are not both listed in `nodes` are skipped, as
    /// are self-loops. When the same pair of places is declared more than
    /// once the last declared time wins, while the street keeps the position
    /// of its first declaration. A kept street with a negative or non-finite
    /// time fails the whole build with [`Error::InvalidWeight`].
    pub fn build<N, S, E, A, B>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = (A, B, f64)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut data = GraphData::default();
        for label in nodes {
            let label = label.into();
            if data.index.contains_key(&label) {
                continue;
            }
            data.index.insert(label.clone(), data.labels.len());
            data.labels.push(label);
            data.adjacency.push(Vec::new());
        }

        let mut pairs: HashMap<(NodeIndex, NodeIndex), usize> = HashMap::new();
        let mut skipped = 0usize;
        for (a, b, time) in edges {
            let (a, b) = (a.as_ref(), b.as_ref());
            let (Some(&ia), Some(&ib)) = (data.index.get(a), data.index.get(b)) else {
                debug!(a, b, "skipping street with unknown endpoint");
                skipped += 1;
                continue;
            };
            if ia == ib {
                debug!(place = a, "ignoring self-loop");
                skipped += 1;
                continue;
            }
            validate_time(a, b, time)?;

            let key = (ia.min(ib), ia.max(ib));
            if let Some(&street) = pairs.get(&key) {
                let entry = &mut data.streets[street];
                warn!(a, b, previous = entry.time, time, "duplicate street, keeping last time");
                entry.time = time;
                continue;
            }

            let street = data.streets.len();
            data.streets.push(StreetEntry { a: ia, b: ib, time });
            data.adjacency[ia].push(Adjacent { target: ib, street });
            data.adjacency[ib].push(Adjacent { target: ia, street });
            pairs.insert(key, street);
        }

        debug!(
            places = data.labels.len(),
            streets = data.streets.len(),
            skipped,
            "built street graph"
        );

        Ok(Self {
            data: Arc::new(data),
        })
    }

    /// Whether a place with this label exists.
    pub fn has_node(&self, label: &str) -> bool {
        self.data.index.contains_key(label)
    }

    /// Whether a street connects `a` and `b` (in either direction).
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index_of(a), self.index_of(b)) {
            (Some(ia), Some(ib)) => self.street_between(ia, ib).is_some(),
            _ => false,
        }
    }

    /// Labels adjacent to `node`, in street declaration order.
    pub fn neighbors(&self, node: &str) -> Result<Vec<&str>> {
        let index = self.resolve(node)?;
        Ok(self.data.adjacency[index]
            .iter()
            .map(|adjacent| self.label(adjacent.target))
            .collect())
    }

    /// `(neighbour, time)` pairs for `node`, in street declaration order.
    pub fn neighbor_times(&self, node: &str) -> Result<Vec<(&str, f64)>> {
        let index = self.resolve(node)?;
        Ok(self
            .adjacent(index)
            .map(|(target, time)| (self.label(target), time))
            .collect())
    }

    /// Travel time of the street between `a` and `b`.
    pub fn edge_weight(&self, a: &str, b: &str) -> Result<f64> {
        let ia = self.resolve(a)?;
        let ib = self.resolve(b)?;
        self.street_between(ia, ib)
            .map(|street| self.data.streets[street].time)
            .ok_or_else(|| Error::EdgeNotFound {
                a: a.to_string(),
                b: b.to_string(),
            })
    }

    /// All place labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.data.labels.iter().map(String::as_str)
    }

    /// Every street exactly once, in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = Street<'_>> + '_ {
        self.data.streets.iter().map(|entry| Street {
            a: self.label(entry.a),
            b: self.label(entry.b),
            time: entry.time,
        })
    }

    pub fn node_count(&self) -> usize {
        self.data.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.data.streets.len()
    }

    /// Summed travel time along `steps`, validating every hop.
    ///
    /// A single-step path costs zero.
    pub fn path_cost<S: AsRef<str>>(&self, steps: &[S]) -> Result<f64> {
        if let Some(first) = steps.first() {
            self.resolve(first.as_ref())?;
        }
        let mut total = 0.0;
        for pair in steps.windows(2) {
            total += self.edge_weight(pair[0].as_ref(), pair[1].as_ref())?;
        }
        Ok(total)
    }

    /// Labels resembling `label`, most similar first.
    pub fn fuzzy_matches(&self, label: &str, limit: usize) -> Vec<String> {
        let needle = label.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .nodes()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    pub(crate) fn index_of(&self, label: &str) -> Option<NodeIndex> {
        self.data.index.get(label).copied()
    }

    /// Resolve a label, attaching suggestions when it is unknown.
    pub(crate) fn resolve(&self, label: &str) -> Result<NodeIndex> {
        self.index_of(label).ok_or_else(|| Error::NodeNotFound {
            label: label.to_string(),
            suggestions: self.fuzzy_matches(label, 3),
        })
    }

    pub(crate) fn label(&self, index: NodeIndex) -> &str {
        &self.data.labels[index]
    }

    /// `(neighbour, time)` pairs for `index`, in declaration order.
    pub(crate) fn adjacent(&self, index: NodeIndex) -> impl Iterator<Item = (NodeIndex, f64)> + '_ {
        self.data.adjacency[index]
            .iter()
            .map(|adjacent| (adjacent.target, self.data.streets[adjacent.street].time))
    }

    fn street_between(&self, a: NodeIndex, b: NodeIndex) -> Option<usize> {
        self.data.adjacency[a]
            .iter()
            .find(|adjacent| adjacent.target == b)
            .map(|adjacent| adjacent.street)
    }
}

/// Build a graph from a parsed city map document.
pub fn build_graph(map: &CityMap) -> Result<Graph> {
    let mut streets = Vec::with_capacity(map.streets.len());
    for record in &map.streets {
        // Unknown endpoints are dropped before their times are inspected.
        if !map.places.contains_key(&record.a) || !map.places.contains_key(&record.b) {
            continue;
        }
        let time = parse_time(&record.a, &record.b, &record.time)?;
        streets.push((record.a.as_str(), record.b.as_str(), time));
    }
    Graph::build(map.places.keys().cloned(), streets)
}

/// Interpret a JSON value as a street travel time.
pub(crate) fn parse_time(a: &str, b: &str, value: &Value) -> Result<f64> {
    let time = value.as_f64().ok_or_else(|| Error::InvalidWeight {
        a: a.to_string(),
        b: b.to_string(),
        value: value.to_string(),
    })?;
    validate_time(a, b, time)?;
    Ok(time)
}

fn validate_time(a: &str, b: &str, time: f64) -> Result<()> {
    if time.is_finite() && time >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidWeight {
            a: a.to_string(),
            b: b.to_string(),
            value: time.to_string(),
        })
    }
}
