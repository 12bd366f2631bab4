use anyhow::Result;
use clap::Args;
use mymarketnews_api::Client;

use crate::output::{print_json, print_list, print_list_csv, OutputFormat};

#[derive(Args)]
pub struct ReportFieldsArgs {
    /// Report slug id
    pub slug: String,
}

pub async fn run(args: &ReportFieldsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let fields = client.report_fields(&args.slug).await?;

    match format {
        OutputFormat::Table => print_list("Field", &fields),
        OutputFormat::Json => print_json(&fields),
        OutputFormat::Csv => print_list_csv("field", &fields)?,
    }

    Ok(())
}
