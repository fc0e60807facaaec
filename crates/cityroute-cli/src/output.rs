//! Output formatting for query results.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use cityroute_lib::{RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one step or route per line.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Machine-readable JSON.
    Json,
}

impl OutputFormat {
    /// Render a route summary to stdout.
    pub fn render_summary(self, summary: &RouteSummary) -> Result<()> {
        match self {
            OutputFormat::Text => print!("{}", summary.render(RouteRenderMode::PlainText)),
            OutputFormat::Rich => print!("{}", summary.render(RouteRenderMode::RichText)),
            OutputFormat::Json => print_json(summary)?,
        }
        Ok(())
    }

    /// Render a list of lines, or the serialisable value when JSON was requested.
    pub fn render_listing<T: Serialize>(self, lines: &[String], value: &T) -> Result<()> {
        match self {
            OutputFormat::Json => print_json(value),
            OutputFormat::Text | OutputFormat::Rich => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                for line in lines {
                    writeln!(handle, "{line}")?;
                }
                Ok(())
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialise output")?;
    println!("{json}");
    Ok(())
}
