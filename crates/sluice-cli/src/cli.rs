//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Sluice: copy CSV objects between buckets, scrubbing PII in transit
#[derive(Parser)]
#[command(name = "sluice")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Copy every CSV object from the source bucket to the destination,
    /// replacing PII columns with placeholder values
    Run {
        /// Output the run report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Scrub a local CSV file without touching any bucket
    Scrub {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>_scrubbed.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
