//! The `view` subcommand: fetch a saved view by id.

use anyhow::Result;
use clap::Args;
use nanigans_lib::SourceClient;

use crate::output::{print_response, OutputFormat};

#[derive(Args)]
pub struct ViewArgs {
    /// View id, as shown in the Nanigans interface
    pub id: String,

    /// Levels of dimensional breakdown
    #[arg(long, default_value = "0")]
    pub depth: u32,
}

pub async fn run(args: &ViewArgs, client: &SourceClient, format: &OutputFormat) -> Result<()> {
    let resp = client.get_view(&args.id, args.depth).await?;
    print_response(&resp, format)
}
