// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Everything that touches files or static tables outside the
// core pipeline:
//
//   registry.rs        — Model identifier → architecture, hidden
//                        size and token style
//
//   tokenizer_store.rs — Loads the pretrained HuggingFace
//                        tokenizer of the selected model
//
//   checkpoint.rs      — Loads fine-tuned weights with Burn's
//                        CompactRecorder
//
//   result_writer.rs   — Appends restored lines to the output file
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Pretrained model lookup table
pub mod registry;

/// Tokenizer loading
pub mod tokenizer_store;

/// Model weight loading
pub mod checkpoint;

/// Output file appender
pub mod result_writer;
