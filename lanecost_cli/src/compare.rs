use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::{config::ConfigArgs, input, table};

#[derive(Args)]
pub struct CompareArgs {
    /// A booking JSON file or a folder of them
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Print the comparisons as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Serialize)]
struct ComparisonRow<'a> {
    driver: &'a str,
    total_cpm: f64,
    total_cost: f64,
    margin_pct: f64,
    recommended_price: f64,
    recommendation: String,
}

pub fn run(args: CompareArgs) -> anyhow::Result<()> {
    let config = args.config.load()?;

    for (path, booking) in input::read_bookings(&args.input)? {
        let quotes = config.engine.compare(&booking, &config.rules)?;

        if args.json {
            let rows: Vec<ComparisonRow> = quotes
                .iter()
                .map(|quote| ComparisonRow {
                    driver: quote.profile().label(),
                    total_cpm: quote.cost.total_cpm,
                    total_cost: quote.cost.total_cost,
                    margin_pct: quote.margin.margin_pct,
                    recommended_price: quote.pricing.recommended_price,
                    recommendation: quote.guardrails.recommendation.to_string(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            continue;
        }

        info!("{:?}: {}", path, booking.lane());
        println!("{}", table::comparison_table(&quotes));
    }

    Ok(())
}
