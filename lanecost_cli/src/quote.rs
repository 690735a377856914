use std::path::PathBuf;

use clap::Args;
use lanecost::rates::driver_type::DriverType;
use tracing::{info, warn};

use crate::{config::ConfigArgs, input, table};

#[derive(Args)]
pub struct QuoteArgs {
    /// A booking JSON file or a folder of them
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Quote with this driver type instead of the one of the booking
    #[arg(long, value_parser = input::parse_driver_type)]
    driver_type: Option<DriverType>,

    /// Print the quotes as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    config: ConfigArgs,
}

pub fn run(args: QuoteArgs) -> anyhow::Result<()> {
    let config = args.config.load()?;

    for (path, booking) in input::read_bookings(&args.input)? {
        let booking = match args.driver_type {
            Some(driver_type) => booking.with_driver_type(driver_type),
            None => booking,
        };

        let quote = config.engine.quote(&booking, &config.rules)?;

        if quote.resolution.is_zone_defaulted() {
            warn!("{:?}: owner-operator zone defaulted", path);
        }

        if args.json {
            println!("{}", serde_json::to_string_pretty(&quote)?);
            continue;
        }

        info!(
            "{:?}: {} {} -> {}",
            path,
            quote.profile(),
            quote.lane,
            quote.guardrails.recommendation
        );
        println!("{}", table::quote_table(&quote));
        println!(
            "revenue ${:.2}, margin {:.1}%, target price ${:.2} ({:.0}%)",
            quote.margin.revenue,
            quote.margin.margin_pct,
            quote.pricing.recommended_price,
            quote.pricing.target_margin_pct
        );
        if !quote.guardrails.violations.is_empty() {
            println!("{}", table::guardrails_table(&quote));
        }
    }

    Ok(())
}
