use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeIndex};

/// Default cap on the number of tied paths returned by [`all_shortest_paths`].
pub const DEFAULT_PATH_LIMIT: usize = 1000;

/// Relative tolerance used when comparing accumulated travel times.
const COST_TOLERANCE: f64 = 1e-9;

/// Ordered sequence of place labels where every consecutive pair is a street.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path {
    steps: Vec<String>,
}

impl Path {
    pub fn new(steps: Vec<String>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of streets travelled.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Summed travel time of this path in `graph`.
    pub fn cost(&self, graph: &Graph) -> Result<f64> {
        graph.path_cost(self.steps.as_slice())
    }

    pub(crate) fn from_indices(graph: &Graph, indices: &[NodeIndex]) -> Self {
        Self {
            steps: indices
                .iter()
                .map(|&index| graph.label(index).to_string())
                .collect(),
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.steps.join(" -> "))
    }
}

/// Fastest path between two places together with its travel time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub path: Path,
    pub cost: f64,
}

/// Every path tied for the minimum travel time, up to the configured cap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSet {
    pub paths: Vec<Path>,
    pub cost: f64,
    /// `true` when more tied paths exist than were returned.
    pub truncated: bool,
}

impl PathSet {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter()
    }
}

/// Tunables for the tied-path enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of tied paths to return.
    pub path_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            path_limit: DEFAULT_PATH_LIMIT,
        }
    }
}

impl SearchOptions {
    pub fn with_path_limit(mut self, path_limit: usize) -> Self {
        self.path_limit = path_limit;
        self
    }
}

/// Find the fastest path from `source` to `target` using Dijkstra's algorithm.
///
/// When several paths tie for the minimum, the first one in the enumeration
/// order of [`all_shortest_paths`] is returned.
pub fn fastest_path(graph: &Graph, source: &str, target: &str) -> Result<ShortestPath> {
    let search = TiedPathSearch::prepare(graph, source, target)?;
    let route = search.first_route().ok_or_else(|| search.no_path())?;

    let path = Path::from_indices(graph, &route);
    let cost = path.cost(graph)?;
    debug!(source, target, cost, hops = path.hop_count(), "found fastest path");
    Ok(ShortestPath { path, cost })
}

/// Enumerate every path whose travel time equals the minimum, up to `limit`.
///
/// Enumeration is depth-first over the streets that lie on some shortest
/// path, expanding neighbours in declaration order, so repeated calls on the
/// same graph return the same paths in the same order. Streets of zero time
/// are only followed towards places the forward search settled later, which
/// keeps the walk acyclic and its running time proportional to the routes
/// returned.
pub fn all_shortest_paths(
    graph: &Graph,
    source: &str,
    target: &str,
    limit: usize,
) -> Result<PathSet> {
    all_shortest_paths_with(
        graph,
        source,
        target,
        &SearchOptions::default().with_path_limit(limit),
    )
}

/// [`all_shortest_paths`] driven by a [`SearchOptions`] value.
pub fn all_shortest_paths_with(
    graph: &Graph,
    source: &str,
    target: &str,
    options: &SearchOptions,
) -> Result<PathSet> {
    if options.path_limit == 0 {
        return Err(Error::InvalidLimit);
    }

    let search = TiedPathSearch::prepare(graph, source, target)?;
    let (routes, truncated) = search.enumerate(options.path_limit);
    if routes.is_empty() {
        return Err(search.no_path());
    }

    debug!(
        source,
        target,
        cost = search.min_cost,
        paths = routes.len(),
        truncated,
        "enumerated tied shortest paths"
    );

    Ok(PathSet {
        paths: routes
            .iter()
            .map(|route| Path::from_indices(graph, route))
            .collect(),
        cost: search.min_cost,
        truncated,
    })
}

/// Travel time from `source` to every reachable place, in settle order.
pub fn shortest_distances<'g>(graph: &'g Graph, source: &str) -> Result<Vec<(&'g str, f64)>> {
    let start = graph.resolve(source)?;
    let table = dijkstra(graph, start, None);
    Ok(table
        .order
        .iter()
        .map(|&index| (graph.label(index), table.dist[index]))
        .collect())
}

/// Distances settled by one Dijkstra run.
struct DistanceTable {
    dist: Vec<f64>,
    order: Vec<NodeIndex>,
}

/// Run Dijkstra from `start`.
///
/// With a `goal`, the run stops once every place no farther than the goal
/// has been settled; places beyond that keep an infinite distance.
fn dijkstra(graph: &Graph, start: NodeIndex, goal: Option<NodeIndex>) -> DistanceTable {
    let node_count = graph.node_count();
    let mut dist = vec![f64::INFINITY; node_count];
    let mut settled = vec![false; node_count];
    let mut order = Vec::new();
    let mut queue = BinaryHeap::new();
    let mut bound: Option<f64> = None;
    let mut sequence = 0u64;

    dist[start] = 0.0;
    queue.push(QueueEntry::new(start, 0.0, sequence));

    while let Some(entry) = queue.pop() {
        if settled[entry.node] {
            continue;
        }
        if let Some(limit) = bound {
            if entry.cost.0 > limit && !approx_eq(entry.cost.0, limit) {
                break;
            }
        }

        settled[entry.node] = true;
        order.push(entry.node);
        if goal == Some(entry.node) {
            bound = Some(entry.cost.0);
        }

        for (next, time) in graph.adjacent(entry.node) {
            if settled[next] {
                continue;
            }
            let next_cost = entry.cost.0 + time;
            if next_cost < dist[next] {
                dist[next] = next_cost;
                sequence += 1;
                queue.push(QueueEntry::new(next, next_cost, sequence));
            }
        }
    }

    // Tentative distances of unsettled places are not final.
    for (index, done) in settled.iter().enumerate() {
        if !done {
            dist[index] = f64::INFINITY;
        }
    }

    DistanceTable { dist, order }
}

/// Shortest-path DAG between two resolved places.
///
/// A street `u -> v` belongs to the DAG when it lies on some fastest route and
/// `v` was settled after `u` by the forward search, so zero-time clusters are
/// crossed in settle order only. Places that cannot reach the target inside
/// the DAG are pruned, which means every branch of the enumeration ends in a
/// route.
struct TiedPathSearch<'g> {
    graph: &'g Graph,
    source: NodeIndex,
    target: NodeIndex,
    successors: Vec<Vec<NodeIndex>>,
    min_cost: f64,
}

impl<'g> TiedPathSearch<'g> {
    fn prepare(graph: &'g Graph, source: &str, target: &str) -> Result<Self> {
        let start = graph.resolve(source)?;
        let goal = graph.resolve(target)?;

        let forward = dijkstra(graph, start, Some(goal));
        let min_cost = forward.dist[goal];
        if !min_cost.is_finite() {
            debug!(source, target, settled = forward.order.len(), "target unreachable");
            return Err(Error::NoPath {
                start: source.to_string(),
                goal: target.to_string(),
            });
        }
        let backward = dijkstra(graph, goal, Some(start));
        let successors = tight_successors(graph, &forward, &backward.dist, goal, min_cost);

        Ok(Self {
            graph,
            source: start,
            target: goal,
            successors,
            min_cost,
        })
    }

    fn no_path(&self) -> Error {
        Error::NoPath {
            start: self.graph.label(self.source).to_string(),
            goal: self.graph.label(self.target).to_string(),
        }
    }

    /// The first route in enumeration order: always take the first successor.
    fn first_route(&self) -> Option<Vec<NodeIndex>> {
        let mut route = vec![self.source];
        let mut node = self.source;
        while node != self.target {
            node = *self.successors[node].first()?;
            route.push(node);
        }
        Some(route)
    }

    /// Depth-first enumeration of DAG routes, returning at most `limit` of
    /// them and whether more were available.
    fn enumerate(&self, limit: usize) -> (Vec<Vec<NodeIndex>>, bool) {
        if self.source == self.target {
            return (vec![vec![self.source]], false);
        }

        let mut found = Vec::new();
        let mut route = vec![self.source];
        let mut cursors = vec![0usize];

        while let Some(&node) = route.last() {
            if node == self.target {
                if found.len() == limit {
                    return (found, true);
                }
                found.push(route.clone());
                route.pop();
                cursors.pop();
                continue;
            }

            let depth = route.len() - 1;
            match self.successors[node].get(cursors[depth]) {
                Some(&next) => {
                    cursors[depth] += 1;
                    route.push(next);
                    cursors.push(0);
                }
                None => {
                    route.pop();
                    cursors.pop();
                }
            }
        }

        (found, false)
    }
}

/// Successor lists of the shortest-path DAG, in neighbour order.
///
/// Places are visited in reverse settle order so every successor is decided
/// before the places that lead to it.
fn tight_successors(
    graph: &Graph,
    forward: &DistanceTable,
    to_target: &[f64],
    target: NodeIndex,
    min_cost: f64,
) -> Vec<Vec<NodeIndex>> {
    let node_count = graph.node_count();
    let mut rank = vec![usize::MAX; node_count];
    for (position, &node) in forward.order.iter().enumerate() {
        rank[node] = position;
    }

    let mut successors = vec![Vec::new(); node_count];
    let mut reaches_target = vec![false; node_count];
    reaches_target[target] = true;

    for &node in forward.order.iter().rev() {
        if node == target {
            continue;
        }
        let reached = forward.dist[node];
        // Unsettled places never reach the target, so `rank[next]` is real.
        let next: Vec<NodeIndex> = graph
            .adjacent(node)
            .filter(|&(next, time)| {
                reaches_target[next]
                    && rank[next] > rank[node]
                    && to_target[next].is_finite()
                    && approx_eq(reached + time + to_target[next], min_cost)
            })
            .map(|(next, _)| next)
            .collect();
        reaches_target[node] = !next.is_empty();
        successors[node] = next;
    }

    successors
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= COST_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: NodeIndex,
    cost: FloatOrd,
    sequence: u64,
}

impl QueueEntry {
    fn new(node: NodeIndex, cost: f64, sequence: u64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
            sequence,
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, earliest push first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
