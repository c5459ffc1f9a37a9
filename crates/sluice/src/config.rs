//! Runtime configuration resolved from the process environment.

use std::env;

use crate::error::{Result, SluiceError};

/// Bucket the run reads from when `SOURCE_BUCKET` is not set.
pub const DEFAULT_SOURCE_BUCKET: &str = "prod2-source-bucket";
/// Bucket the run writes to when `DESTINATION_BUCKET` is not set.
pub const DEFAULT_DESTINATION_BUCKET: &str = "prod2-destination-bucket";

/// Configuration for one run, fixed at process start.
#[derive(Debug, Clone)]
pub struct SluiceConfig {
    pub source_bucket: String,
    pub destination_bucket: String,
    /// AWS region name, or the region label for a custom endpoint.
    pub region: String,
    /// Custom S3-compatible endpoint URL, if any.
    pub endpoint: Option<String>,
    /// Use path-style addressing instead of virtual-hosted style.
    pub path_style: bool,
}

impl SluiceConfig {
    /// Resolve configuration from the environment.
    ///
    /// Reads a `.env` file when present. Every value has a default, so a
    /// plain invocation works against the standard deployment buckets.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            source_bucket: env::var("SOURCE_BUCKET")
                .unwrap_or_else(|_| DEFAULT_SOURCE_BUCKET.to_string()),
            destination_bucket: env::var("DESTINATION_BUCKET")
                .unwrap_or_else(|_| DEFAULT_DESTINATION_BUCKET.to_string()),
            region: env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            endpoint: env::var("S3_ENDPOINT").ok(),
            path_style: env::var("S3_PATH_STYLE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.source_bucket.is_empty() || self.destination_bucket.is_empty() {
            return Err(SluiceError::Config(
                "bucket names must not be empty".to_string(),
            ));
        }
        if self.source_bucket == self.destination_bucket {
            // Writing scrubbed objects over their own originals would
            // destroy the source data.
            return Err(SluiceError::Config(
                "source and destination buckets must differ".to_string(),
            ));
        }
        Ok(())
    }
}
