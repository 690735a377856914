use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{compare::CompareArgs, quote::QuoteArgs};

mod compare;
mod config;
mod file_utils;
mod input;
mod quote;
mod table;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cost a booking and check it against the business rules
    #[command(visible_alias = "q")]
    Quote {
        #[command(flatten)]
        args: QuoteArgs,
    },
    /// Cost a booking for every driver profile
    #[command(visible_alias = "c")]
    Compare {
        #[command(flatten)]
        args: CompareArgs,
    },
    /// Print the JSON schema of the booking payload
    Schema,
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Quote { args }) => quote::run(args)?,
        Some(Commands::Compare { args }) => compare::run(args)?,
        Some(Commands::Schema) => println!("{}", lanecost::json::schema::generate_json_schema()?),
        None => {}
    }

    Ok(())
}
