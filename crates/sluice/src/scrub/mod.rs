//! The scrubbing transform: replace PII columns with fixed placeholders.

mod rules;
mod scrubber;

pub use rules::{ResolvedRules, ScrubRule, ScrubRules};
pub use scrubber::Scrubber;
