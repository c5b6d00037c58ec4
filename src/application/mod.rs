// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the other layers to restore punctuation over an
// input file. No model math and no printing here; only the
// order in which the other layers are called.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The inference workflow and its per-record pipeline
pub mod infer_use_case;
