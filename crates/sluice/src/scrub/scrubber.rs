//! The scrubbing transform itself: CSV text in, CSV text out.

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{Result, SluiceError};

use super::rules::ScrubRules;

/// Applies a [`ScrubRules`] set to CSV documents.
///
/// `scrub` is a pure function over its argument and is safe to call
/// concurrently on independent inputs. It is also idempotent, since every
/// placeholder is a fixed point of the transform.
#[derive(Debug, Clone, Default)]
pub struct Scrubber {
    rules: ScrubRules,
}

impl Scrubber {
    /// Create a scrubber with the default rule set.
    pub fn new() -> Self {
        Self {
            rules: ScrubRules::new(),
        }
    }

    /// Scrub one CSV document.
    ///
    /// The first row is the header and passes through verbatim. Every data
    /// row has the rule columns overwritten with their placeholders; all
    /// other fields, including any past the rule range, pass through
    /// unchanged in their original order.
    ///
    /// Fails with [`SluiceError::ShortRow`] when a data row has fewer fields
    /// than the resolved rules reach, so malformed input surfaces instead of
    /// being partially scrubbed.
    pub fn scrub(&self, content: &str) -> Result<String> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(content.as_bytes());

        let header = reader.headers()?.clone();
        if header.is_empty() {
            // Nothing at all, not even a header row.
            return Ok(String::new());
        }

        let resolved = self.rules.resolve(&header);

        let mut buffer = Vec::new();
        {
            let mut writer = WriterBuilder::new().from_writer(&mut buffer);
            writer.write_record(&header)?;

            for (index, record) in reader.records().enumerate() {
                let record = record?;
                let mut fields: Vec<String> = record.iter().map(str::to_string).collect();

                if fields.len() < resolved.required_fields() {
                    // Rows are 1-based and the header occupies row 1.
                    return Err(SluiceError::ShortRow {
                        row: index + 2,
                        fields: fields.len(),
                        required: resolved.required_fields(),
                    });
                }

                resolved.apply(&mut fields);
                writer.write_record(&fields)?;
            }

            writer
                .flush()
                .map_err(|e| SluiceError::Csv(csv::Error::from(e)))?;
        }

        // The writer only ever emits what it was fed, which came in as &str.
        Ok(String::from_utf8(buffer).expect("CSV writer output is UTF-8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrub::rules::{
        DUMMY_ADDRESS, DUMMY_CITY, DUMMY_COUNTRY, DUMMY_EMAIL, DUMMY_PHONE, DUMMY_STATE, DUMMY_ZIP,
    };

    const HEADER: &str = "order_id,order_date,email,phone,product,address,city,state,zip,country";

    fn scrub(content: &str) -> Result<String> {
        Scrubber::new().scrub(content)
    }

    #[test]
    fn test_scrub_replaces_pii_columns() {
        let content = format!(
            "{}\nOrder1,2024-01-01,a@b.com,555-1234,Widget,123 Main St,City,State,12345,Country\n",
            HEADER
        );
        let scrubbed = scrub(&content).expect("scrub failed");

        let expected = format!(
            "{}\nOrder1,2024-01-01,{},{},Widget,{},{},{},{},{}\n",
            HEADER,
            DUMMY_EMAIL,
            DUMMY_PHONE,
            DUMMY_ADDRESS,
            DUMMY_CITY,
            DUMMY_STATE,
            DUMMY_ZIP,
            DUMMY_COUNTRY,
        );
        assert_eq!(scrubbed, expected);
    }

    #[test]
    fn test_product_column_passes_through() {
        // Column 4 sits between two scrubbed columns and stays as-is.
        let content = format!(
            "{}\nOrder1,2024-01-01,a@b.com,555-1234,Deluxe Widget,1 Elm,Town,TX,77001,USA\n",
            HEADER
        );
        let scrubbed = scrub(&content).expect("scrub failed");
        assert!(scrubbed.contains("Deluxe Widget"));
        assert!(!scrubbed.contains("a@b.com"));
        assert!(!scrubbed.contains("1 Elm"));
    }

    #[test]
    fn test_fields_past_rule_range_pass_through() {
        let content = format!(
            "{},notes,score\nOrder1,2024-01-01,a@b.com,555-1234,Widget,1 Elm,Town,TX,77001,USA,gift wrap,9\n",
            HEADER
        );
        let scrubbed = scrub(&content).expect("scrub failed");
        assert!(scrubbed.contains("gift wrap"));
        assert!(scrubbed.ends_with(",gift wrap,9\n"));
    }

    #[test]
    fn test_header_only_input_unchanged() {
        let content = format!("{}\n", HEADER);
        let scrubbed = scrub(&content).expect("scrub failed");
        assert_eq!(scrubbed, content);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scrub("").expect("scrub failed"), "");
    }

    #[test]
    fn test_idempotent() {
        let content = format!(
            "{}\nOrder1,2024-01-01,a@b.com,555-1234,Widget,123 Main St,City,State,12345,Country\n\
             Order2,2024-01-02,c@d.org,555-9999,Gadget,9 Oak Ave,Ville,VT,05401,USA\n",
            HEADER
        );
        let once = scrub(&content).expect("first scrub failed");
        let twice = scrub(&once).expect("second scrub failed");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_short_row_fails_with_row_number() {
        let content = format!(
            "{}\nOrder1,2024-01-01,a@b.com,555-1234,Widget,123 Main St,City,State,12345,Country\n\
             Order2,2024-01-02,c@d.org\n",
            HEADER
        );
        let err = scrub(&content).expect_err("short row must fail");
        match err {
            SluiceError::ShortRow { row, fields, required } => {
                assert_eq!(row, 3);
                assert_eq!(fields, 3);
                assert_eq!(required, 10);
            }
            other => panic!("expected ShortRow, got {:?}", other),
        }
    }

    #[test]
    fn test_quoted_fields_survive() {
        let content = format!(
            "{}\n\"Order 1, rush\",2024-01-01,a@b.com,555-1234,\"Widget, Large\",1 Elm,Town,TX,77001,USA\n",
            HEADER
        );
        let scrubbed = scrub(&content).expect("scrub failed");
        assert!(scrubbed.contains("\"Order 1, rush\""));
        assert!(scrubbed.contains("\"Widget, Large\""));
    }

    #[test]
    fn test_scrub_follows_header_names() {
        // Same columns, shuffled: names win over positions.
        let content = "email,order_id,order_date,phone,product,address,city,state,zip,country\n\
                       a@b.com,Order1,2024-01-01,555-1234,Widget,1 Elm,Town,TX,77001,USA\n";
        let scrubbed = scrub(content).expect("scrub failed");
        assert!(scrubbed.starts_with("email,order_id"));
        assert!(scrubbed.contains(&format!("{},Order1,2024-01-01", DUMMY_EMAIL)));
        assert!(!scrubbed.contains("555-1234"));
    }
}
