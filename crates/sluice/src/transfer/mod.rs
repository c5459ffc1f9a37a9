//! Transfer orchestration: enumerate, fetch, scrub, upload.

mod report;

pub use report::{ObjectOutcome, ObjectStatus, RunReport, RunSummary, Stage};

use std::sync::Arc;

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::error::{Result, SluiceError};
use crate::scrub::Scrubber;
use crate::store::ObjectStore;

/// Suffix that marks an object as processable. Case-sensitive.
const CSV_SUFFIX: &str = ".csv";

/// Drives one scrub-and-copy run between two object stores.
///
/// Objects are processed strictly sequentially, one in flight at a time.
/// A failure in any step of one object is caught at the object boundary,
/// recorded in the report, and never aborts the run; only enumeration and
/// credential errors do.
pub struct Transfer {
    source: Arc<dyn ObjectStore>,
    destination: Arc<dyn ObjectStore>,
    scrubber: Scrubber,
}

impl Transfer {
    /// Create a transfer between two stores with the default scrub rules.
    pub fn new(source: Arc<dyn ObjectStore>, destination: Arc<dyn ObjectStore>) -> Self {
        Self {
            source,
            destination,
            scrubber: Scrubber::new(),
        }
    }

    /// Run one full pass over the source store.
    ///
    /// Enumerates every key, skips those without a `.csv` suffix, and pushes
    /// each remaining object through fetch → decode → scrub → upload. The
    /// destination object keeps the source key; an existing destination
    /// object under that key is overwritten.
    pub async fn run(&self) -> Result<RunReport> {
        let started_at = Utc::now();

        let keys = self.source.list().await?;
        if keys.is_empty() {
            info!(bucket = self.source.name(), "no objects found in source bucket");
        }

        let mut outcomes = Vec::with_capacity(keys.len());
        for key in keys {
            let status = if key.ends_with(CSV_SUFFIX) {
                match self.copy_object(&key).await {
                    Ok(status) => status,
                    Err(err) => {
                        warn!(key = %key, error = %err, "object failed");
                        ObjectStatus::Failed {
                            stage: failing_stage(&err),
                            message: err.to_string(),
                        }
                    }
                }
            } else {
                info!(key = %key, "skipping non-CSV object");
                ObjectStatus::Skipped {
                    reason: "not a .csv object".to_string(),
                }
            };
            outcomes.push(ObjectOutcome { key, status });
        }

        let summary = RunSummary::from_outcomes(&outcomes);
        info!(
            copied = summary.copied,
            skipped = summary.skipped,
            failed = summary.failed,
            "run complete"
        );

        Ok(RunReport {
            source: self.source.name().to_string(),
            destination: self.destination.name().to_string(),
            started_at,
            finished_at: Utc::now(),
            outcomes,
            summary,
        })
    }

    /// Push one object through the pipeline.
    ///
    /// Nothing reaches the destination unless the scrub succeeded; there is
    /// no intermediate scratch file, the scrubbed text uploads straight from
    /// memory.
    async fn copy_object(&self, key: &str) -> Result<ObjectStatus> {
        let raw = self.source.get(key).await?;
        let text = String::from_utf8(raw).map_err(|source| SluiceError::Decode {
            key: key.to_string(),
            source,
        })?;

        let scrubbed = self.scrubber.scrub(&text)?;
        self.destination.put(key, scrubbed.as_bytes()).await?;

        let mut hasher = Sha256::new();
        hasher.update(scrubbed.as_bytes());
        let sha256 = format!("sha256:{:x}", hasher.finalize());

        info!(key = %key, bytes = scrubbed.len(), "scrubbed and copied");
        Ok(ObjectStatus::Copied {
            bytes: scrubbed.len(),
            sha256,
        })
    }
}

/// Map a per-object error to the pipeline stage it belongs to.
fn failing_stage(err: &SluiceError) -> Stage {
    match err {
        SluiceError::Fetch { .. } => Stage::Fetch,
        SluiceError::Decode { .. } => Stage::Decode,
        SluiceError::Upload { .. } => Stage::Upload,
        // ShortRow, Csv, and anything else raised mid-transform.
        _ => Stage::Scrub,
    }
}
