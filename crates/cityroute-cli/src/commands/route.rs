//! Route command handlers: fastest, tied and reachability queries.

use anyhow::Result;

use cityroute_lib::{
    all_shortest_paths, fastest_path, find_any_path, Error as RouteError, Graph, RouteSummary,
};

use cityroute_cli::output::OutputFormat;

/// Handle `route`: the single fastest path.
pub fn handle_fastest(graph: &Graph, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    let shortest = fastest_path(graph, from, to).map_err(handle_route_failure)?;
    format.render_summary(&RouteSummary::from_shortest(from, to, &shortest))
}

/// Handle `routes`: every path tied for the fastest time.
pub fn handle_tied(
    graph: &Graph,
    format: OutputFormat,
    from: &str,
    to: &str,
    limit: usize,
) -> Result<()> {
    let set = all_shortest_paths(graph, from, to, limit).map_err(handle_route_failure)?;
    format.render_summary(&RouteSummary::from_path_set(from, to, &set))
}

/// Handle `reach`: any connecting path, travel times ignored.
pub fn handle_reach(graph: &Graph, format: OutputFormat, from: &str, to: &str) -> Result<()> {
    match find_any_path(graph, from, to).map_err(handle_route_failure)? {
        Some(path) => format.render_summary(&RouteSummary::from_reachability(from, to, &path)),
        None => Err(anyhow::anyhow!(
            "No path connects {} and {}; they lie in separate parts of the city.",
            from,
            to
        )),
    }
}

pub(crate) fn handle_route_failure(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::NodeNotFound { label, suggestions } => {
            anyhow::anyhow!(format_unknown_place_message(&label, &suggestions))
        }
        RouteError::NoPath { start, goal } => anyhow::anyhow!(
            "No route found between {} and {}. The two places are not connected by any street.",
            start,
            goal
        ),
        RouteError::InvalidLimit => anyhow::anyhow!("--limit must be at least 1."),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_place_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown place '{}'.", name);
    if !suggestions.is_empty() {
        let formatted = if let [suggestion] = suggestions {
            format!("Did you mean '{suggestion}'?")
        } else {
            let joined = suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Did you mean one of: {}?", joined)
        };
        message.push(' ');
        message.push_str(&formatted);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_place_lists_suggestions() {
        let message = format_unknown_place_message("Cinmea", &["Cinema".to_string()]);
        assert_eq!(message, "Unknown place 'Cinmea'. Did you mean 'Cinema'?");

        let message =
            format_unknown_place_message("Ban", &["Bank".to_string(), "Bar".to_string()]);
        assert!(message.ends_with("Did you mean one of: 'Bank', 'Bar'?"));
    }

    #[test]
    fn no_path_and_unknown_place_read_differently() {
        let no_path = handle_route_failure(RouteError::NoPath {
            start: "A".into(),
            goal: "X".into(),
        });
        let unknown = handle_route_failure(RouteError::NodeNotFound {
            label: "Q".into(),
            suggestions: Vec::new(),
        });
        assert!(no_path.to_string().starts_with("No route found"));
        assert!(unknown.to_string().starts_with("Unknown place"));
    }
}
