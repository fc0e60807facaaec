//! Export command handler.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use cityroute_lib::codec::{write_geojson, write_json};
use cityroute_lib::Graph;

/// Export document flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Graph document that can be reloaded with `--graph`.
    Json,
    /// GeoJSON feature collection for external mapping tools.
    Geojson,
}

/// Handle `export`.
pub fn handle_export(graph: &Graph, kind: ExportFormat, output: &Path) -> Result<()> {
    let written = match kind {
        ExportFormat::Json => write_json(graph, output),
        ExportFormat::Geojson => write_geojson(graph, output),
    };
    written.with_context(|| format!("failed to write {}", output.display()))?;

    println!("Wrote {}", output.display());
    Ok(())
}
