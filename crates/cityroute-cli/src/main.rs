use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cityroute_cli::output::OutputFormat;
use cityroute_cli::source::GraphSource;
use cityroute_lib::DEFAULT_PATH_LIMIT;

mod commands;

use commands::export::ExportFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "City street-network route finder")]
struct Cli {
    /// City map document (`nodos` with coordinates plus `calles`).
    #[arg(long, env = "CITYROUTE_MAP", global = true)]
    map: Option<PathBuf>,

    /// Graph document written by `export --as json`, instead of a city map.
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// Output format for query results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fastest route between two places.
    Route {
        /// Starting place.
        #[arg(long = "from")]
        from: String,
        /// Destination place.
        #[arg(long = "to")]
        to: String,
    },
    /// Every route tied for the fastest travel time.
    Routes {
        /// Starting place.
        #[arg(long = "from")]
        from: String,
        /// Destination place.
        #[arg(long = "to")]
        to: String,
        /// Maximum number of tied routes to list.
        #[arg(long, env = "CITYROUTE_PATH_LIMIT", default_value_t = DEFAULT_PATH_LIMIT)]
        limit: usize,
    },
    /// Any connecting path, ignoring travel times.
    Reach {
        /// Starting place.
        #[arg(long = "from")]
        from: String,
        /// Destination place.
        #[arg(long = "to")]
        to: String,
    },
    /// List every street with its travel time.
    Streets,
    /// List every place.
    Places,
    /// List the places directly connected to one place.
    Neighbours {
        /// Place to inspect.
        #[arg(long)]
        place: String,
    },
    /// Write the street graph as a JSON graph document or GeoJSON.
    Export {
        /// Export format.
        #[arg(long = "as", value_enum, default_value_t = ExportFormat::Json)]
        kind: ExportFormat,
        /// Destination file.
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let source = GraphSource::from_options(cli.map.as_deref(), cli.graph.as_deref())?;
    let graph = source.load()?;
    let format = cli.format;

    match cli.command {
        Command::Route { from, to } => commands::route::handle_fastest(&graph, format, &from, &to),
        Command::Routes { from, to, limit } => {
            commands::route::handle_tied(&graph, format, &from, &to, limit)
        }
        Command::Reach { from, to } => commands::route::handle_reach(&graph, format, &from, &to),
        Command::Streets => commands::inventory::handle_streets(&graph, format),
        Command::Places => commands::inventory::handle_places(&graph, format),
        Command::Neighbours { place } => {
            commands::inventory::handle_neighbours(&graph, format, &place)
        }
        Command::Export { kind, output } => commands::export::handle_export(&graph, kind, &output),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
