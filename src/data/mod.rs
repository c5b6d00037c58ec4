// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between a raw CSV line and model-ready tensors,
// and back from predictions to text.
//
//   input CSV
//       │
//       ▼
//   CsvRecordReader   → reads the text column
//       │
//       ▼
//   Preprocessor      → strips punctuation, splits words
//       │
//       ▼
//   Windower          → sub-tokens packed into padded windows
//       │
//       ▼
//   WindowBatcher     → stacks windows into tensors
//       │
//       ▼
//   (model forward pass, Layer 5)
//       │
//       ▼
//   Decoder           → classes → punctuated, cased text
//
// Each module is responsible for exactly one step.

/// Reads input records from a CSV column
pub mod reader;

/// Strips punctuation and splits lines into words
pub mod preprocessor;

/// The padded window type shared by windower, batcher and decoder
pub mod window;

/// Packs word sub-tokens into fixed-length windows
pub mod windower;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;

/// Maps predicted classes back onto words
pub mod decoder;
