// ============================================================
// Layer 4 — Record Reader
// ============================================================
// Streams input records from a CSV file with a header row.
//
// Only one column is used: the one holding the raw text. Every
// other column is ignored. A file without that column fails when
// the reader is opened; a row that cannot be parsed fails when
// the iterator reaches it, after every earlier row has already
// been yielded.
//
// Example input (text column "01_nb"):
//
//   id,01_nb
//   1,hello world how are you
//   2,"i went home, then slept"
//
// Reference: csv crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{anyhow, Context, Result};
use std::{fs::File, io::Read, path::PathBuf};

use crate::domain::record::InputRecord;
use crate::domain::traits::{RecordIter, RecordSource};

/// Reads the text column of a CSV file.
pub struct CsvRecordReader {
    path:   PathBuf,
    column: String,
}

impl CsvRecordReader {
    pub fn new(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self {
            path:   path.into(),
            column: column.into(),
        }
    }

    /// Parse the header of `reader` and return an iterator over the
    /// remaining rows. `source` names the input in errors.
    pub fn records_from<'r, R: Read + 'r>(
        reader: R,
        column: &str,
        source: &str,
    ) -> Result<RecordIter<'r>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .with_context(|| format!("Cannot read header row of '{source}'"))?
            .clone();

        let col = headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| {
                anyhow!(
                    "Column '{}' not found in '{}' (columns: {})",
                    column,
                    source,
                    headers.iter().collect::<Vec<_>>().join(", ")
                )
            })?;

        let column = column.to_string();
        let source = source.to_string();

        let rows = csv_reader
            .into_records()
            .enumerate()
            .map(move |(index, row)| -> Result<InputRecord> {
                let row = row
                    .with_context(|| format!("Malformed row {} in '{}'", index + 1, source))?;
                let text = row.get(col).ok_or_else(|| {
                    anyhow!("Row {} in '{}' has no '{}' field", index + 1, source, column)
                })?;
                Ok(InputRecord::new(index, text))
            });

        Ok(Box::new(rows))
    }
}

impl RecordSource for CsvRecordReader {
    fn records(&self) -> Result<RecordIter<'_>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open input file '{}'", self.path.display()))?;

        tracing::info!("Reading records from '{}'", self.path.display());
        Self::records_from(file, &self.column, &self.path.display().to_string())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(data: &'static str) -> Result<Vec<InputRecord>> {
        CsvRecordReader::records_from(data.as_bytes(), "01_nb", "test")?.collect()
    }

    #[test]
    fn test_reads_named_column() {
        let recs = read_all("id,01_nb\n1,hello world\n2,\"i went home, then slept\"\n").unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0], InputRecord::new(0, "hello world"));
        assert_eq!(recs[1].text, "i went home, then slept");
        assert_eq!(recs[1].index, 1);
    }

    #[test]
    fn test_missing_column_fails_on_open() {
        let err = CsvRecordReader::records_from("id,text\n1,hello\n".as_bytes(), "01_nb", "test")
            .err()
            .unwrap();
        assert!(err.to_string().contains("01_nb"));
    }

    #[test]
    fn test_ragged_row_is_an_error() {
        assert!(read_all("id,01_nb\n1,hello,extra\n").is_err());
    }

    #[test]
    fn test_rows_before_a_bad_row_are_yielded() {
        let mut rows = CsvRecordReader::records_from(
            "01_nb\nfirst line\nbad,row\nthird\n".as_bytes(),
            "01_nb",
            "test",
        )
        .unwrap();

        assert_eq!(rows.next().unwrap().unwrap(), InputRecord::new(0, "first line"));
        assert!(rows.next().unwrap().is_err());
    }

    #[test]
    fn test_header_only_gives_no_records() {
        assert!(read_all("01_nb\n").unwrap().is_empty());
    }

    #[test]
    fn test_records_from_file() {
        let path = std::env::temp_dir().join("punctuation_restore_reader_test.csv");
        std::fs::write(&path, "01_nb\nfirst line\nsecond line\n").unwrap();
        let recs: Vec<InputRecord> = CsvRecordReader::new(&path, "01_nb")
            .records()
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(recs.len(), 2);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let reader = CsvRecordReader::new("/definitely/not/here.csv", "01_nb");
        assert!(reader.records().is_err());
    }
}
