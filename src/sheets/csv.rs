use std::path::{Path, PathBuf};

use super::{Row, SheetSource};
use crate::error::SheetsError;

/// A CSV export of the sheet on local disk
///
/// The file is re-read on every fetch, so edits show up on the next lookup.
#[derive(Clone, Debug)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SheetSource for CsvFile {
    async fn fetch_rows(&self) -> Result<Vec<Row>, SheetsError> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        Ok(parse_csv(&contents)?)
    }

    fn describe(&self) -> String {
        format!("CSV file {}", self.path.display())
    }
}

/// Split CSV text into rows, skipping blank lines.
///
/// Rows may have differing lengths, and quoted fields may span lines.
pub fn parse_csv(contents: &str) -> Result<Vec<Row>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_plain_and_quoted_fields() {
        let rows = parse_csv("Name,RollNo,Address\r\n\"Doe, Jane\",R7,\"12 \"\"Oak\"\" St\"\n").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Name", "RollNo", "Address"]);
        assert_eq!(rows[1], vec!["Doe, Jane", "R7", "12 \"Oak\" St"]);
    }

    #[test]
    fn test_parse_keeps_empty_cells_and_skips_blank_lines() {
        let rows = parse_csv("Name,Notes,Course\n\nBob,,CS\n   \n").unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["Bob", "", "CS"]);
    }

    #[test]
    fn test_quoted_field_spans_lines() {
        let rows = parse_csv("Name,RollNo,Address,Marksheet\nAlice,R1,\"12 Hill Rd\nPune\",Yes\nBob,R2\n")
            .unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["Alice", "R1", "12 Hill Rd\nPune", "Yes"]);
        assert_eq!(rows[2], vec!["Bob", "R2"]);
    }

    #[tokio::test]
    async fn test_multiline_address_keeps_marksheet_cell() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Name,RollNo,Address,Marksheet\r\nAlice,R1,\"12 Hill Rd\r\nPune\",Yes\r\n").unwrap();
        file.flush().unwrap();

        let service = crate::LookupService::new(CsvFile::new(file.path()));
        let params = crate::SearchParams {
            roll_number: Some("R1".to_string()),
            ..Default::default()
        };
        match service.lookup(params).await.unwrap() {
            crate::SearchResult::Single(single) => {
                assert!(single.available);
                assert_eq!(single.student.address, "12 Hill Rd\r\nPune");
            }
            other => panic!("expected single result, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_reads_file_each_time() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Name,RollNo").unwrap();
        writeln!(file, "Alice,R1").unwrap();
        file.flush().unwrap();

        let source = CsvFile::new(file.path());
        assert_eq!(source.fetch_rows().await.unwrap().len(), 2);

        writeln!(file, "Bob,R2").unwrap();
        file.flush().unwrap();
        let rows = source.fetch_rows().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec!["Bob", "R2"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvFile::new(dir.path().join("missing.csv"));

        match source.fetch_rows().await {
            Err(SheetsError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
