//! Sluice CLI - PII-scrubbing CSV transfer between storage buckets.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Run { json } => commands::run::run(json, cli.verbose),

        Commands::Scrub { file, output } => commands::scrub::run(file, output, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
