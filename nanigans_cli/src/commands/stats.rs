//! The `stats` subcommand: ad-hoc queries paginated one day at a time.

use anyhow::{bail, Result};
use clap::Args;
use nanigans_lib::validation;
use nanigans_lib::{SourceClient, StatsQuery};

use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct StatsArgs {
    /// Attribute to group by (repeatable). Defaults to budgetPool, strategyGroup, adPlan
    #[arg(long = "attribute")]
    pub attributes: Vec<String>,

    /// Metric to fetch (repeatable). Defaults to impressions, clicks, fbSpend
    #[arg(long = "metric")]
    pub metrics: Vec<String>,

    /// First day, YYYY-MM-DD. Both --start and --end are needed, otherwise the last 7 days are used
    #[arg(long)]
    pub start: Option<String>,

    /// Last day (inclusive), YYYY-MM-DD
    #[arg(long)]
    pub end: Option<String>,

    /// Levels of dimensional breakdown
    #[arg(long, default_value = "0")]
    pub depth: u32,
}

pub async fn run(args: &StatsArgs, client: &SourceClient, format: &OutputFormat) -> Result<()> {
    let start = args
        .start
        .as_ref()
        .map(|s| validation::validate_date(s))
        .transpose()?;
    let end = args
        .end
        .as_ref()
        .map(|s| validation::validate_date(s))
        .transpose()?;

    let mut query = StatsQuery::default()
        .attributes(args.attributes.clone())
        .metrics(args.metrics.clone())
        .depth(args.depth);

    match (start, end) {
        (Some(s), Some(e)) if s > e => {
            bail!("--start ({}) must be on or before --end ({})", s, e);
        }
        (Some(s), Some(e)) => query = query.date_range(s, e),
        (None, None) => {}
        _ => tracing::warn!("Only one of --start/--end given; using the last 7 days"),
    }

    let resp = client.get_stats(&query).await?;
    print_response(&resp, format)
}
