//! Scrub command - sanitize a local CSV file, no buckets involved.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use sluice::{Scrubber, SluiceError};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let content = fs::read_to_string(&file).map_err(|source| SluiceError::Io {
        path: file.clone(),
        source,
    })?;
    let scrubbed = Scrubber::new().scrub(&content)?;

    // Default output sits next to the input, never over it.
    let output_path = output.unwrap_or_else(|| {
        let stem = file.file_stem().unwrap_or_default().to_string_lossy();
        file.with_file_name(format!("{}_scrubbed.csv", stem))
    });

    fs::write(&output_path, scrubbed).map_err(|source| SluiceError::Io {
        path: output_path.clone(),
        source,
    })?;

    println!(
        "{} {} {} {}",
        "Scrubbed".cyan().bold(),
        file.display().to_string().white(),
        "->".cyan(),
        output_path.display().to_string().white().bold()
    );

    Ok(())
}
