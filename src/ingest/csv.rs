//! Delimited-file reader.
//!
//! The first row is the header. One column holds the text to normalize:
//! ```csv
//! id,date,text
//! 1,2024-01-01,Check this out!! http://x.co
//! 2,2024-01-02,
//! ```
//! An empty text cell yields `None`, and so does a row too short to reach the
//! text column. A cell holding only whitespace is kept as text. A row with more
//! fields than the header, or with invalid UTF-8, is skipped with a warning.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::{debug, warn};

use crate::error::{Result, TweetnormError};
use crate::ingest::RecordBatch;

/// Default name of the text column.
pub const DEFAULT_TEXT_COLUMN: &str = "text";

/// Reads one text column from a delimited file.
#[derive(Clone, Debug)]
pub struct CsvRecordReader {
    /// Header name of the text column.
    column: String,
    /// Field delimiter (default: ',')
    delimiter: u8,
    /// Whether rows with more fields than the header are kept
    flexible: bool,
}

impl Default for CsvRecordReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvRecordReader {
    /// Create a reader for the `text` column of a comma-separated file.
    pub fn new() -> Self {
        CsvRecordReader {
            column: DEFAULT_TEXT_COLUMN.to_string(),
            delimiter: b',',
            flexible: false,
        }
    }

    /// Read a different column.
    pub fn with_column<S: Into<String>>(mut self, column: S) -> Self {
        self.column = column.into();
        self
    }

    /// Set a custom delimiter. Only single-byte delimiters are supported.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(TweetnormError::invalid_argument(format!(
                "delimiter must be a single ASCII character, got {delimiter:?}"
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// Keep rows that have more fields than the header.
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }

    /// Get the text column name.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Read a file.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> Result<RecordBatch> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            TweetnormError::ingest(format!("cannot open {}: {e}", path.display()))
        })?;
        let batch = self.read(file)?;
        debug!(
            "Read {} rows from {} ({} skipped)",
            batch.len(),
            path.display(),
            batch.skipped
        );
        Ok(batch)
    }

    /// Read delimited text held in memory.
    pub fn read_str(&self, input: &str) -> Result<RecordBatch> {
        self.read(input.as_bytes())
    }

    /// Read from any byte source.
    ///
    /// A missing header or a header without the text column is an error;
    /// malformed data rows are skipped and counted.
    pub fn read<R: Read>(&self, input: R) -> Result<RecordBatch> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(Trim::Headers)
            .flexible(true)
            .from_reader(input);

        let headers = reader
            .headers()
            .map_err(|e| TweetnormError::ingest(format!("Failed to read CSV headers: {e}")))?
            .clone();

        let index = headers
            .iter()
            .position(|name| name == self.column)
            .ok_or_else(|| {
                TweetnormError::ingest(format!(
                    "column '{}' not found (available: {})",
                    self.column,
                    headers.iter().collect::<Vec<_>>().join(", ")
                ))
            })?;

        let mut batch = RecordBatch::default();
        for row in reader.records() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    let line = e.position().map_or(0, |p| p.line());
                    warn!("Skipping malformed row at line {line}: {e}");
                    batch.skipped += 1;
                    continue;
                }
            };

            if !self.flexible && row.len() > headers.len() {
                let line = row.position().map_or(0, |p| p.line());
                warn!(
                    "Skipping row at line {line}: {} fields, header has {}",
                    row.len(),
                    headers.len()
                );
                batch.skipped += 1;
                continue;
            }

            let text = row
                .get(index)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string);
            batch.records.push(text);
        }

        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_text_column() {
        let input = "id,text\n1,hello world\n2,\n3,\"quoted, with comma\"\n";
        let batch = CsvRecordReader::new().read_str(input).unwrap();

        assert_eq!(batch.records, vec![
            Some("hello world".to_string()),
            None,
            Some("quoted, with comma".to_string())
        ]);
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn test_skips_malformed_rows() {
        let input = "id,text\n1,first\n2,bad,extra\n3,third\n";
        let batch = CsvRecordReader::new().read_str(input).unwrap();

        assert_eq!(batch.records, vec![Some("first".to_string()), Some("third".to_string())]);
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn test_short_rows_are_missing() {
        let input = "id,text\n1,a\n2\n3,b\n";
        let batch = CsvRecordReader::new().read_str(input).unwrap();

        assert_eq!(batch.records, vec![Some("a".to_string()), None, Some("b".to_string())]);
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn test_short_and_long_rows() {
        let input = "id,text\n1,a\n2\n3,b,extra\n4,c\n";
        let batch = CsvRecordReader::new().read_str(input).unwrap();
        assert_eq!(batch.records, vec![Some("a".to_string()), None, Some("c".to_string())]);
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn test_flexible_rows() {
        let input = "text,id\nfirst,1\nsecond\nthird,3,extra\n";
        let batch = CsvRecordReader::new()
            .with_flexible(true)
            .read_str(input)
            .unwrap();
        assert_eq!(batch.records, vec![
            Some("first".to_string()),
            Some("second".to_string()),
            Some("third".to_string())
        ]);
        assert_eq!(batch.skipped, 0);
    }

    #[test]
    fn test_whitespace_cell_is_kept() {
        let batch = CsvRecordReader::new().read_str("id,text\n1,   \n2,\n").unwrap();
        assert_eq!(batch.records, vec![Some("   ".to_string()), None]);
    }

    #[test]
    fn test_skips_invalid_utf8() {
        let mut input = b"id,text\n1,ok\n2,".to_vec();
        input.extend_from_slice(&[0xff, 0xfe]);
        input.extend_from_slice(b"\n3,fine\n");

        let batch = CsvRecordReader::new().read(input.as_slice()).unwrap();
        assert_eq!(batch.records, vec![Some("ok".to_string()), Some("fine".to_string())]);
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn test_custom_column_and_delimiter() {
        let input = "tweet;user\ngood day;bob\n";
        let batch = CsvRecordReader::new()
            .with_column("tweet")
            .with_delimiter(';')
            .unwrap()
            .read_str(input)
            .unwrap();
        assert_eq!(batch.records, vec![Some("good day".to_string())]);
    }

    #[test]
    fn test_missing_column_is_error() {
        let result = CsvRecordReader::new().read_str("id,body\n1,x\n");
        let err = result.unwrap_err();
        assert!(matches!(err, TweetnormError::Ingest(_)));
        assert!(err.to_string().contains("id, body"));
    }

    #[test]
    fn test_invalid_delimiter() {
        assert!(CsvRecordReader::new().with_delimiter('→').is_err());
    }

    #[test]
    fn test_missing_file() {
        let result = CsvRecordReader::new().read_path("/no/such/file.csv");
        assert!(matches!(result, Err(TweetnormError::Ingest(_))));
    }
}
