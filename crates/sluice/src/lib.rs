//! Sluice: copy CSV objects between storage buckets, scrubbing PII in transit.
//!
//! One run enumerates every object in a source bucket, pushes each `.csv`
//! object through a fixed column-scrubbing transform, and writes the result
//! to a destination bucket under the same key. Non-CSV objects are skipped;
//! a failure in one object never aborts the run.
//!
//! # Core Principles
//!
//! - **Pure transform**: scrubbing is a deterministic, idempotent function
//!   over the document text
//! - **Failure isolation**: per-object errors are recorded and the run moves
//!   on; only credential and enumeration errors are fatal
//! - **Explicit collaborators**: stores are constructed and passed in, never
//!   ambient globals
//!
//! # Example
//!
//! ```
//! use sluice::Scrubber;
//!
//! let csv = "id,date,email,phone,product,address,city,state,zip,country\n\
//!            1,2024-01-01,a@b.com,555-1234,Widget,1 Main St,Springfield,IL,62704,USA\n";
//!
//! let scrubbed = Scrubber::new().scrub(csv).unwrap();
//! assert!(scrubbed.contains("dummy_email@example.com"));
//! assert!(scrubbed.contains("Widget"));
//! ```

pub mod config;
pub mod error;
pub mod scrub;
pub mod store;
pub mod transfer;

pub use config::SluiceConfig;
pub use error::{Result, SluiceError};
pub use scrub::{ScrubRule, ScrubRules, Scrubber};
pub use store::{MemoryStore, ObjectStore, S3Store};
pub use transfer::{ObjectOutcome, ObjectStatus, RunReport, RunSummary, Stage, Transfer};
