mod commands;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mymarketnews_api::{Client, ClientConfig};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "mmn")]
#[command(about = "Query USDA AMS MyMarketNews reports and market data")]
struct Cli {
    /// Output format: table, json or csv
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Path to a TOML client configuration
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// API key for report requests (overrides config and environment)
    #[arg(long, global = true)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one report and print its rows
    Report(commands::report::ReportArgs),
    /// List currently published reports
    Reports,
    /// Most recent or all report dates of a report
    ReportDates(commands::report_dates::ReportDatesArgs),
    /// Column names of a report
    ReportFields(commands::report_fields::ReportFieldsArgs),
    /// Run a fruit and vegetable market query
    Market(commands::market::MarketArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mymarketnews=info".parse()?),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        _ => OutputFormat::Table,
    };

    let config = match &cli.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClientConfig::default(),
    };
    let api_key = cli.api_key.as_deref();

    match &cli.command {
        Commands::Report(args) => {
            let client = Client::for_reports(config, api_key)?;
            commands::report::run(args, client, &format).await?
        }
        Commands::Reports => {
            let client = Client::for_reports(config, api_key)?;
            commands::reports::run(&client, &format).await?
        }
        Commands::ReportDates(args) => {
            let client = Client::for_reports(config, api_key)?;
            commands::report_dates::run(args, &client, &format).await?
        }
        Commands::ReportFields(args) => {
            let client = Client::for_reports(config, api_key)?;
            commands::report_fields::run(args, &client, &format).await?
        }
        Commands::Market(args) => {
            let client = Client::for_market(config)?;
            commands::market::run(args, client, &format).await?
        }
    }

    Ok(())
}
