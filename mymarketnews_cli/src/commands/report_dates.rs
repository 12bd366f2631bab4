use anyhow::Result;
use clap::Args;
use mymarketnews_api::{Client, DateSelection};

use crate::output::{print_json, print_list, print_list_csv, OutputFormat};

#[derive(Args)]
pub struct ReportDatesArgs {
    /// Report slug id
    pub slug: String,

    /// List every distinct date instead of the most recent one
    #[arg(long)]
    pub all: bool,
}

pub async fn run(args: &ReportDatesArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let selection = if args.all {
        DateSelection::All
    } else {
        DateSelection::Recent
    };
    let dates = client.report_dates(&args.slug, selection).await?;

    match format {
        OutputFormat::Table => print_list("Report Date", &dates),
        OutputFormat::Json => print_json(&dates),
        OutputFormat::Csv => print_list_csv("report_date", &dates)?,
    }

    Ok(())
}
