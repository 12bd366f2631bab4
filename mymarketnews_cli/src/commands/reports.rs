use anyhow::Result;
use mymarketnews_api::Client;

use crate::output::{print_json, print_reports_csv, print_reports_table, OutputFormat};

pub async fn run(client: &Client, format: &OutputFormat) -> Result<()> {
    let reports = client.current_reports().await?;
    eprintln!("{} published reports", reports.len());

    match format {
        OutputFormat::Table => print_reports_table(&reports),
        OutputFormat::Json => print_json(&reports),
        OutputFormat::Csv => print_reports_csv(&reports)?,
    }

    Ok(())
}
