// ============================================================
// Layer 6 — Result Writer
// ============================================================
// Appends restored records to the output file, one line each:
//
//   <cleaned original line>,"<restored text>"
//
// The file is opened in append mode for every record, so output
// accumulates across records and across runs; nothing written
// earlier is ever truncated.

use anyhow::{Context, Result};
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::domain::record::OutputRecord;
use crate::domain::traits::RecordSink;

pub struct ResultWriter {
    path: PathBuf,
}

impl ResultWriter {
    /// Create the writer, creating missing parent directories.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create output directory '{}'", parent.display()))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for ResultWriter {
    fn store(&self, record: &OutputRecord) -> Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Cannot open output file '{}'", self.path.display()))?;

        writeln!(f, "{}", record.to_line())
            .with_context(|| format!("Cannot write to '{}'", self.path.display()))?;

        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_without_truncating() {
        let dir  = std::env::temp_dir().join("punctuation_restore_writer_test");
        let path = dir.join("nested").join("out.txt");
        fs::remove_dir_all(&dir).ok();

        let writer = ResultWriter::new(&path).unwrap();
        writer.store(&OutputRecord::new("hello world", "Hello world. ")).unwrap();
        writer.store(&OutputRecord::new("how are you", "how are you. ")).unwrap();

        // A second writer on the same file keeps earlier lines
        let again = ResultWriter::new(&path).unwrap();
        again.store(&OutputRecord::new("", "")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "hello world,\"Hello world. \"\nhow are you,\"how are you. \"\n,\"\"\n"
        );

        fs::remove_dir_all(&dir).ok();
    }
}
