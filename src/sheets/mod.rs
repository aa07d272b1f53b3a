//! Tabular data sources the lookup reads from
//!
//! A source hands back the whole sheet as rows of strings, header row first.
//! Every call reads fresh data; nothing is cached between calls.

pub mod csv;
pub mod google;

use std::future::Future;

use crate::error::SheetsError;

pub use self::csv::CsvFile;
pub use google::{GoogleSheets, ServiceAccount};

/// One sheet row; cell meaning comes from the header's column order
pub type Row = Vec<String>;

/// A read-only source of sheet rows
pub trait SheetSource: Send + Sync {
    /// Fetch every row of the sheet, header first.
    fn fetch_rows(&self) -> impl Future<Output = Result<Vec<Row>, SheetsError>> + Send;

    /// Short human-readable description used in logs.
    fn describe(&self) -> String;
}

/// Fixed rows held in memory
#[derive(Clone, Debug, Default)]
pub struct InMemorySheet {
    rows: Vec<Row>,
}

impl InMemorySheet {
    pub fn new(rows: Vec<Row>) -> Self {
        InMemorySheet { rows }
    }

    /// Build from string slices, handy for fixtures.
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        InMemorySheet {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }
}

impl SheetSource for InMemorySheet {
    async fn fetch_rows(&self) -> Result<Vec<Row>, SheetsError> {
        Ok(self.rows.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory sheet ({} rows)", self.rows.len())
    }
}

/// The source picked by configuration at startup
#[derive(Debug)]
pub enum DataSource {
    Google(GoogleSheets),
    Csv(CsvFile),
}

impl SheetSource for DataSource {
    async fn fetch_rows(&self) -> Result<Vec<Row>, SheetsError> {
        match self {
            DataSource::Google(sheets) => sheets.fetch_rows().await,
            DataSource::Csv(file) => file.fetch_rows().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            DataSource::Google(sheets) => sheets.describe(),
            DataSource::Csv(file) => file.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_returns_rows_unchanged() {
        let sheet = InMemorySheet::from_strs(&[&["Name", "RollNo"], &["Alice", "R1"]]);
        let rows = sheet.fetch_rows().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["Alice".to_string(), "R1".to_string()]);
        assert_eq!(sheet.describe(), "in-memory sheet (2 rows)");
    }
}
