// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that name the concepts
// of punctuation restoration. No burn types, no file I/O.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Input and output text records
pub mod record;

// The six punctuation / casing classes of the classifier head
pub mod punctuation;

// Special token ids per tokenizer family
pub mod token_style;

// Core abstractions (traits) that other layers implement
pub mod traits;
