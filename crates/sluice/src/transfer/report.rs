//! Per-run reporting types.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pipeline stage at which an object failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Fetch,
    Decode,
    Scrub,
    Upload,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            Stage::Fetch => "fetch",
            Stage::Decode => "decode",
            Stage::Scrub => "scrub",
            Stage::Upload => "upload",
        };
        f.write_str(stage)
    }
}

/// What happened to one enumerated object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ObjectStatus {
    /// Scrubbed and uploaded to the destination under the same key.
    Copied { bytes: usize, sha256: String },
    /// Not a CSV object; never processed.
    Skipped { reason: String },
    /// Failed at `stage`; the run moved on to the next key.
    Failed { stage: Stage, message: String },
}

/// Outcome of one enumerated object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectOutcome {
    pub key: String,
    #[serde(flatten)]
    pub status: ObjectStatus,
}

/// Counts over all outcomes of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub copied: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Tally a list of outcomes.
    pub fn from_outcomes(outcomes: &[ObjectOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome.status {
                ObjectStatus::Copied { .. } => summary.copied += 1,
                ObjectStatus::Skipped { .. } => summary.skipped += 1,
                ObjectStatus::Failed { .. } => summary.failed += 1,
            }
        }
        summary
    }
}

/// Result of one full transfer run.
///
/// Serializable so the CLI can emit it as JSON. Per-object failures live in
/// `outcomes`; a report with failures still represents a completed run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Source bucket name.
    pub source: String,
    /// Destination bucket name.
    pub destination: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<ObjectOutcome>,
    pub summary: RunSummary,
}

impl RunReport {
    /// Whether any object failed during the run.
    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}
