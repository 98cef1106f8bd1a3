//! The `timeranges`, `attributes` and `metrics` subcommands.

use anyhow::Result;
use nanigans_lib::SourceClient;

use crate::output::{print_response, OutputFormat};

#[derive(Clone, Copy)]
pub enum Lookup {
    TimeRanges,
    Attributes,
    Metrics,
}

pub async fn run(lookup: Lookup, client: &SourceClient, format: &OutputFormat) -> Result<()> {
    let resp = match lookup {
        Lookup::TimeRanges => client.get_timeranges().await,
        Lookup::Attributes => client.get_attributes().await,
        Lookup::Metrics => client.get_metrics().await,
    };
    print_response(&resp, format)
}
