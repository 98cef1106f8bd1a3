mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nanigans_lib::{Config, DataSource, SourceClient};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "nanigans")]
#[command(about = "Query advertising performance data from the Nanigans API")]
struct Cli {
    /// Output format: table, json, csv, md
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Data source: placements (native) or publishers
    #[arg(long, default_value = "placements", global = true)]
    source: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in time ranges
    Timeranges,
    /// List available attributes (dimensions)
    Attributes,
    /// List available metrics
    Metrics,
    /// Fetch a view saved in the Nanigans interface
    View(commands::view::ViewArgs),
    /// Run an ad-hoc stats query, one request per day
    Stats(commands::stats::StatsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nanigans=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "md" | "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let source: DataSource = cli.source.parse()?;
    let config = Config::from_env()?;
    let client = SourceClient::new(config.client(), source);

    match &cli.command {
        Commands::Timeranges => {
            commands::lookup::run(commands::lookup::Lookup::TimeRanges, &client, &format).await?
        }
        Commands::Attributes => {
            commands::lookup::run(commands::lookup::Lookup::Attributes, &client, &format).await?
        }
        Commands::Metrics => {
            commands::lookup::run(commands::lookup::Lookup::Metrics, &client, &format).await?
        }
        Commands::View(args) => commands::view::run(args, &client, &format).await?,
        Commands::Stats(args) => commands::stats::run(args, &client, &format).await?,
    }

    Ok(())
}
