//! Run command - one full scrub-and-copy pass between the configured buckets.

use std::sync::Arc;

use colored::Colorize;
use sluice::{ObjectStatus, RunReport, S3Store, SluiceConfig, Transfer};

pub fn run(json_output: bool, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = SluiceConfig::from_env()?;

    // Credential problems surface here, before any object operation.
    let source = Arc::new(S3Store::open(&config.source_bucket, &config)?);
    let destination = Arc::new(S3Store::open(&config.destination_bucket, &config)?);

    let transfer = Transfer::new(source, destination);

    let runtime = tokio::runtime::Runtime::new()?;
    let report = runtime.block_on(transfer.run())?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &RunReport) {
    println!(
        "{} {} {} {}",
        "Transfer".cyan().bold(),
        report.source.white().bold(),
        "->".cyan(),
        report.destination.white().bold()
    );
    println!();

    if report.outcomes.is_empty() {
        println!(
            "{} No objects found in the source bucket.",
            "Warning:".yellow().bold()
        );
        return;
    }

    for outcome in &report.outcomes {
        match &outcome.status {
            ObjectStatus::Copied { bytes, .. } => println!(
                "  {} {} ({} bytes)",
                "copied ".green(),
                outcome.key.white(),
                bytes
            ),
            ObjectStatus::Skipped { reason } => println!(
                "  {} {} ({})",
                "skipped".yellow(),
                outcome.key.white(),
                reason
            ),
            ObjectStatus::Failed { stage, message } => println!(
                "  {} {} ({}: {})",
                "failed ".red().bold(),
                outcome.key.white(),
                stage,
                message
            ),
        }
    }

    println!();
    let summary = &report.summary;
    println!(
        "{} {} copied, {} skipped, {} failed",
        "Summary:".cyan().bold(),
        summary.copied.to_string().green(),
        summary.skipped.to_string().yellow(),
        summary.failed.to_string().red()
    );
}
