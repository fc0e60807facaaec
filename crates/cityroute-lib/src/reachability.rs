//! Unweighted "some path" search.
//!
//! [`find_any_path`] explores a FIFO frontier of partial paths and marks a
//! place as visited only when a path ending there is dequeued, not when it is
//! enqueued. A place can therefore sit in the frontier several times before it
//! is expanded. Every place is expanded at most once, so the search always
//! terminates on a finite graph, but the returned path is simply the first one
//! to reach the target in FIFO order. It is not guaranteed to be the path with
//! the fewest streets, and travel times are ignored entirely.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::error::Result;
use crate::graph::{Graph, NodeIndex};
use crate::path::Path;

/// Find any path between `source` and `target`, ignoring travel times.
///
/// Returns `Ok(None)` when the two places lie in different components.
pub fn find_any_path(graph: &Graph, source: &str, target: &str) -> Result<Option<Path>> {
    let start = graph.resolve(source)?;
    let goal = graph.resolve(target)?;

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut queue: VecDeque<Vec<NodeIndex>> = VecDeque::new();
    queue.push_back(vec![start]);

    while let Some(route) = queue.pop_front() {
        let Some(&current) = route.last() else {
            continue;
        };
        if current == goal {
            debug!(source, target, expanded = visited.len(), "reachability path found");
            return Ok(Some(Path::from_indices(graph, &route)));
        }
        if !visited.insert(current) {
            continue;
        }
        for (next, _) in graph.adjacent(current) {
            let mut extended = route.clone();
            extended.push(next);
            queue.push_back(extended);
        }
    }

    debug!(source, target, expanded = visited.len(), "no reachability path");
    Ok(None)
}

/// Whether `a` and `b` lie in the same connected component.
pub fn connected(graph: &Graph, a: &str, b: &str) -> Result<bool> {
    Ok(find_any_path(graph, a, b)?.is_some())
}
