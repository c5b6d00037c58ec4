// ============================================================
// Layer 3 — Record Domain Types
// ============================================================
// A record is one line of unpunctuated text read from the input
// file, and the line that is later appended to the output file.

use serde::{Deserialize, Serialize};

/// One raw text line from the input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// 0-based row number in the input file (header excluded)
    pub index: usize,

    /// The raw text, still carrying whatever punctuation it had
    pub text: String,
}

impl InputRecord {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self { index, text: text.into() }
    }
}

/// The result of restoring one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// The input line after punctuation stripping
    pub original: String,

    /// Punctuated, cased text; every word is followed by one space
    pub restored: String,
}

impl OutputRecord {
    pub fn new(original: impl Into<String>, restored: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            restored: restored.into(),
        }
    }

    /// Format as a line of the output file:
    ///   <original>,"<restored>"
    pub fn to_line(&self) -> String {
        format!("{},\"{}\"", self.original, self.restored)
    }
}
