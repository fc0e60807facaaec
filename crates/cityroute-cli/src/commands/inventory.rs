//! Listing commands: streets, places and neighbours.

use anyhow::Result;
use serde::Serialize;

use cityroute_lib::output::format_time;
use cityroute_lib::Graph;

use cityroute_cli::output::OutputFormat;

use super::route::handle_route_failure;

#[derive(Debug, Serialize)]
struct StreetRow<'a> {
    a: &'a str,
    b: &'a str,
    time: f64,
}

/// Handle `streets`.
pub fn handle_streets(graph: &Graph, format: OutputFormat) -> Result<()> {
    let rows: Vec<StreetRow<'_>> = graph
        .edges()
        .map(|street| StreetRow {
            a: street.a,
            b: street.b,
            time: street.time,
        })
        .collect();
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            format!(
                "The street between {} and {} takes {}",
                row.a,
                row.b,
                format_time(row.time)
            )
        })
        .collect();
    format.render_listing(&lines, &rows)
}

/// Handle `places`.
pub fn handle_places(graph: &Graph, format: OutputFormat) -> Result<()> {
    let places: Vec<&str> = graph.nodes().collect();
    let lines: Vec<String> = places
        .iter()
        .map(|place| format!("Place: {place}"))
        .collect();
    format.render_listing(&lines, &places)
}

#[derive(Debug, Serialize)]
struct NeighbourRow<'a> {
    place: &'a str,
    time: f64,
}

/// Handle `neighbours`.
pub fn handle_neighbours(graph: &Graph, format: OutputFormat, place: &str) -> Result<()> {
    let rows: Vec<NeighbourRow<'_>> = graph
        .neighbor_times(place)
        .map_err(handle_route_failure)?
        .into_iter()
        .map(|(place, time)| NeighbourRow { place, time })
        .collect();
    let lines: Vec<String> = rows
        .iter()
        .map(|row| format!("{} ({})", row.place, format_time(row.time)))
        .collect();
    format.render_listing(&lines, &rows)
}
