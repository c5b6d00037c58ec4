// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline talks to its collaborators through these traits:
//
//   SubwordTokenizer    — splits one word into vocabulary ids
//                         (HuggingFace tokenizer in production,
//                         a fake in the unit tests)
//   PunctuationPredictor — runs the classifier over windows
//                         (burn model in production)
//   RecordSource        — yields input records
//   RecordSink          — stores restored records
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

use crate::data::window::TokenWindow;
use crate::domain::record::{InputRecord, OutputRecord};

// ─── SubwordTokenizer ─────────────────────────────────────────────────────────
/// Anything that can turn a single word into sub-token ids.
///
/// Implementations:
///   - tokenizers::Tokenizer → pretrained WordPiece / BPE vocabulary
pub trait SubwordTokenizer {
    /// Sub-token ids for one word, without special tokens.
    /// May be empty when the tokenizer's normaliser drops every char.
    fn subword_ids(&self, word: &str) -> Result<Vec<u32>>;
}

// ─── PunctuationPredictor ─────────────────────────────────────────────────────
/// Anything that predicts a class index for every position of
/// every window it is given.
///
/// Implementations:
///   - Inferencer<B> → PunctuationModel on a burn backend
pub trait PunctuationPredictor {
    /// Returns one Vec per window, each as long as the window
    fn predict(&self, windows: &[TokenWindow]) -> Result<Vec<Vec<usize>>>;
}

// ─── RecordSource ─────────────────────────────────────────────────────────────
/// Lazily produced input records. An `Err` item stops the run;
/// records before it have already been handled.
pub type RecordIter<'a> = Box<dyn Iterator<Item = Result<InputRecord>> + 'a>;

/// Any component that can yield input records one at a time.
///
/// Implementations:
///   - CsvRecordReader → reads one column of a CSV file
pub trait RecordSource {
    /// Open the source. Errors here (missing file, missing
    /// column) happen before any record is read.
    fn records(&self) -> Result<RecordIter<'_>>;
}

// ─── RecordSink ───────────────────────────────────────────────────────────────
/// Any component that can store a restored record.
///
/// Implementations:
///   - ResultWriter → appends to the output text file
pub trait RecordSink {
    fn store(&self, record: &OutputRecord) -> Result<()>;
}
