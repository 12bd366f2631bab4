use anyhow::Result;
use clap::Args;
use mymarketnews_api::types::Table;
use mymarketnews_api::{Client, Report, ReportQuery};

use crate::output::{
    cell, print_json, print_list, print_list_csv, print_table, print_table_csv, OutputFormat,
};

#[derive(Args)]
pub struct ReportArgs {
    /// Report slug id (e.g. 2466)
    pub slug: String,

    /// Only rows with report_begin_date on or after this date (MM/DD/YYYY)
    #[arg(long)]
    pub begin: Option<String>,

    /// Only rows with report_end_date on or before this date (MM/DD/YYYY)
    #[arg(long)]
    pub end: Option<String>,

    /// Print only this field's value from each row
    #[arg(long)]
    pub field: Option<String>,
}

pub async fn run(args: &ReportArgs, client: Client, format: &OutputFormat) -> Result<()> {
    let mut query = ReportQuery::new(&args.slug);
    if let Some(begin) = &args.begin {
        query = query.with_begin_date(begin.as_str());
    }
    if let Some(end) = &args.end {
        query = query.with_end_date(end.as_str());
    }

    let report = Report::fetch_query(client, query).await?;
    let table = report.table();
    eprintln!("{} ({} rows)", report, table.len());

    if let Some(field) = &args.field {
        let values = field_values(&table, field);
        match format {
            OutputFormat::Table => print_list(field, &values),
            OutputFormat::Json => print_json(&table.column(field)),
            OutputFormat::Csv => print_list_csv(field, &values)?,
        }
        return Ok(());
    }

    match format {
        OutputFormat::Table => print_table(&table),
        OutputFormat::Json => print_json(report.data()),
        OutputFormat::Csv => print_table_csv(&table)?,
    }

    Ok(())
}

fn field_values(table: &Table, field: &str) -> Vec<String> {
    table
        .column(field)
        .into_iter()
        .map(|v| v.map(cell).unwrap_or_default())
        .collect()
}
