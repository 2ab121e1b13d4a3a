//! Record ingestion.
//!
//! Readers turn an input source into the ordered `Option<String>` values a
//! pipeline consumes. Rows a reader cannot make sense of are skipped and
//! counted here, so the pipeline never sees them.

pub mod csv;

pub use self::csv::CsvRecordReader;

use serde::{Deserialize, Serialize};

/// Text values read from a source, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBatch {
    /// One entry per accepted row; `None` when the text cell is empty.
    pub records: Vec<Option<String>>,
    /// Rows skipped as malformed.
    pub skipped: usize,
}

impl RecordBatch {
    /// Number of accepted rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no row was accepted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
