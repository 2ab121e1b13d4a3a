use std::io::Write;

use tempfile::NamedTempFile;
use tweetnorm::error::Result;
use tweetnorm::ingest::CsvRecordReader;
use tweetnorm::pipeline::{Pipeline, Record};

fn write_csv(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}

#[test]
fn csv_rows_flow_through_the_pipeline_in_order() -> Result<()> {
    let file = write_csv(
        b"id,date,text\n\
          1,2024-01-01,Loving the new phones!! #tech\n\
          2,2024-01-01,\n\
          3,2024-01-02,broken,row\n\
          4,2024-01-03,@anna check https://x.co/abc\n",
    );

    let batch = CsvRecordReader::new().read_path(file.path())?;
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.skipped, 1);

    let output = Pipeline::english()?.run_parallel(batch.records, 2)?;
    assert_eq!(output, vec![
        Record::from(vec!["love".to_string(), "new".to_string(), "phone".to_string()]),
        Record::Missing,
        Record::from(vec!["check".to_string()]),
    ]);
    Ok(())
}

#[test]
fn tab_separated_input_with_custom_column() -> Result<()> {
    let file = write_csv(b"user\ttweet\nbob\tcats and dogs\n");

    let batch = CsvRecordReader::new()
        .with_column("tweet")
        .with_delimiter('\t')?
        .read_path(file.path())?;
    assert_eq!(batch.records, vec![Some("cats and dogs".to_string())]);
    Ok(())
}

#[test]
fn undecodable_rows_are_skipped() -> Result<()> {
    let mut content = b"text\nfine\n".to_vec();
    content.extend_from_slice(&[0xc3, 0x28, b'\n']);
    content.extend_from_slice(b"also fine\n");
    let file = write_csv(&content);

    let batch = CsvRecordReader::new().read_path(file.path())?;
    assert_eq!(batch.records, vec![
        Some("fine".to_string()),
        Some("also fine".to_string())
    ]);
    assert_eq!(batch.skipped, 1);
    Ok(())
}

#[test]
fn missing_text_column_is_fatal() {
    let file = write_csv(b"id,body\n1,hello\n");
    assert!(CsvRecordReader::new().read_path(file.path()).is_err());
}
