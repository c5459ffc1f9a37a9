//! Scrub rules: which columns get overwritten, and with what.

/// Placeholder written into the email column.
pub const DUMMY_EMAIL: &str = "dummy_email@example.com";
/// Placeholder written into the phone column.
pub const DUMMY_PHONE: &str = "123-456-7890";
/// Placeholder written into the street address column.
pub const DUMMY_ADDRESS: &str = "Dummy Address";
/// Placeholder written into the city column.
pub const DUMMY_CITY: &str = "Dummy City";
/// Placeholder written into the state column.
pub const DUMMY_STATE: &str = "Dummy State";
/// Placeholder written into the zip column.
pub const DUMMY_ZIP: &str = "00000";
/// Placeholder written into the country column.
pub const DUMMY_COUNTRY: &str = "Dummy Country";

/// One column to overwrite.
///
/// The column is addressed by header name first (case-insensitive match
/// against the document's actual header row) and by `index` when the name
/// does not appear there, so documents with the expected layout behave
/// identically whether or not their headers are labeled.
#[derive(Debug, Clone)]
pub struct ScrubRule {
    /// Header name the rule matches, case-insensitively.
    pub header: &'static str,
    /// Column index used when no header cell carries the name.
    pub index: usize,
    /// Fixed replacement value.
    pub placeholder: &'static str,
}

// Default rule set for the order-export layout. Column 4 (the product
// field between phone and address) is left untouched.
const DEFAULT_RULES: &[ScrubRule] = &[
    ScrubRule { header: "email", index: 2, placeholder: DUMMY_EMAIL },
    ScrubRule { header: "phone", index: 3, placeholder: DUMMY_PHONE },
    ScrubRule { header: "address", index: 5, placeholder: DUMMY_ADDRESS },
    ScrubRule { header: "city", index: 6, placeholder: DUMMY_CITY },
    ScrubRule { header: "state", index: 7, placeholder: DUMMY_STATE },
    ScrubRule { header: "zip", index: 8, placeholder: DUMMY_ZIP },
    ScrubRule { header: "country", index: 9, placeholder: DUMMY_COUNTRY },
];

/// The process-wide scrub rule set.
#[derive(Debug, Clone)]
pub struct ScrubRules {
    rules: Vec<ScrubRule>,
}

impl ScrubRules {
    /// Create the default rule set.
    pub fn new() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }

    /// Bind the rules to one document's header row.
    ///
    /// Each rule resolves to the index of the first header cell matching its
    /// name, or to its fixed fallback index otherwise.
    pub fn resolve(&self, header: &csv::StringRecord) -> ResolvedRules {
        let columns: Vec<(usize, &'static str)> = self
            .rules
            .iter()
            .map(|rule| {
                let index = header
                    .iter()
                    .position(|cell| cell.trim().eq_ignore_ascii_case(rule.header))
                    .unwrap_or(rule.index);
                (index, rule.placeholder)
            })
            .collect();

        let required = columns.iter().map(|&(index, _)| index + 1).max().unwrap_or(0);

        ResolvedRules { columns, required }
    }
}

impl Default for ScrubRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Rules bound to the column layout of one document.
#[derive(Debug, Clone)]
pub struct ResolvedRules {
    columns: Vec<(usize, &'static str)>,
    required: usize,
}

impl ResolvedRules {
    /// Minimum field count a data row must have.
    pub fn required_fields(&self) -> usize {
        self.required
    }

    /// Overwrite the scrubbed columns of one row in place.
    ///
    /// The row must have at least [`required_fields`](Self::required_fields)
    /// fields; the caller checks that before applying.
    pub fn apply(&self, row: &mut [String]) {
        for &(index, placeholder) in &self.columns {
            row[index] = placeholder.to_string();
        }
    }
}
