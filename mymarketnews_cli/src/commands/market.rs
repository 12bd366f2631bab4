use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mymarketnews_api::{Client, Market, MarketBuilder};

use crate::output::{print_json, print_table, print_table_csv, OutputFormat};

#[derive(Args)]
pub struct MarketArgs {
    /// JSON file with commodity, region, class_, organic, begin_date and end_date keys
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Commodity name (e.g. "Lettuce, Green Leaf")
    #[arg(long)]
    pub commodity: Option<String>,

    /// Region: national, northeast, southeast, midwest, south central, ...
    #[arg(long)]
    pub region: Option<String>,

    /// Commodity class: all, fruit, vegetables, herbs, ornamentals, hemp, ...
    #[arg(long)]
    pub class: Option<String>,

    /// Organic flag: yes, no or all
    #[arg(long)]
    pub organic: Option<String>,

    /// Begin date (MM/DD/YYYY)
    #[arg(long)]
    pub begin: Option<String>,

    /// End date (MM/DD/YYYY)
    #[arg(long)]
    pub end: Option<String>,
}

pub async fn run(args: &MarketArgs, client: Client, format: &OutputFormat) -> Result<()> {
    let builder = builder_from_args(args)?;
    let mut market = builder.build(client)?;
    market.refresh_data().await?;

    eprintln!("{} rows", market.data().len());

    match format {
        OutputFormat::Table => print_table(market.data()),
        OutputFormat::Json => print_json(market.data()),
        OutputFormat::Csv => print_table_csv(market.data())?,
    }

    Ok(())
}

fn builder_from_args(args: &MarketArgs) -> Result<MarketBuilder> {
    let mut builder = match &args.params {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let value: serde_json::Value = serde_json::from_str(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            MarketBuilder::from_json(&value)?
        }
        None => Market::builder(),
    };

    if let Some(commodity) = &args.commodity {
        builder = builder.commodity(commodity);
    }
    if let Some(region) = &args.region {
        builder = builder.region(region);
    }
    if let Some(class) = &args.class {
        builder = builder.class(class);
    }
    if let Some(organic) = &args.organic {
        builder = builder.organic(organic.as_str());
    }
    if let Some(begin) = &args.begin {
        builder = builder.begin_date(begin.as_str());
    }
    if let Some(end) = &args.end {
        builder = builder.end_date(end.as_str());
    }
    Ok(builder)
}
