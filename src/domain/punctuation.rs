// ============================================================
// Layer 3 — Punctuation Classes
// ============================================================
// The classifier head predicts one class per word. Each class
// carries a punctuation suffix and a casing transform:
//
//   class │ suffix │ casing
//   ──────┼────────┼───────────
//     0   │  ""    │ unchanged
//     1   │  ","   │ unchanged
//     2   │  "."   │ unchanged
//     3   │  ""    │ title-case
//     4   │  "."   │ title-case
//     5   │  ","   │ title-case
//
// The table is kept literally as the fine-tuned checkpoints
// were labelled with it.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Casing transform applied to a word before its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Casing {
    /// Keep the word exactly as it appeared in the input
    Unchanged,
    /// Upper-case the first letter of every letter run, lower-case the rest
    TitleCase,
}

impl Casing {
    pub fn apply(self, word: &str) -> String {
        match self {
            Casing::Unchanged => word.to_string(),
            Casing::TitleCase => title_case(word),
        }
    }
}

/// One of the six decode classes of the punctuation head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunctuationClass {
    Plain,
    Comma,
    Period,
    Capitalized,
    CapitalizedPeriod,
    CapitalizedComma,
}

impl PunctuationClass {
    /// All classes in index order
    pub const ALL: [PunctuationClass; 6] = [
        PunctuationClass::Plain,
        PunctuationClass::Comma,
        PunctuationClass::Period,
        PunctuationClass::Capitalized,
        PunctuationClass::CapitalizedPeriod,
        PunctuationClass::CapitalizedComma,
    ];

    /// Map a raw argmax index from the model onto a class.
    pub fn from_index(index: usize) -> Result<Self> {
        match Self::ALL.get(index) {
            Some(class) => Ok(*class),
            None => bail!(
                "Predicted class {} is outside the punctuation table (0..{})",
                index,
                Self::ALL.len()
            ),
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            PunctuationClass::Plain | PunctuationClass::Capitalized => "",
            PunctuationClass::Comma | PunctuationClass::CapitalizedComma => ",",
            PunctuationClass::Period | PunctuationClass::CapitalizedPeriod => ".",
        }
    }

    pub fn casing(self) -> Casing {
        match self {
            PunctuationClass::Plain | PunctuationClass::Comma | PunctuationClass::Period => {
                Casing::Unchanged
            }
            PunctuationClass::Capitalized
            | PunctuationClass::CapitalizedPeriod
            | PunctuationClass::CapitalizedComma => Casing::TitleCase,
        }
    }

    /// Render one word the way this class prescribes, without the
    /// trailing separator.
    pub fn render(self, word: &str) -> String {
        let mut out = self.casing().apply(word);
        out.push_str(self.suffix());
        out
    }
}

/// Title-case a word: the first letter after any non-letter is
/// upper-cased, every other letter is lower-cased.
///
/// Example: "o'NEIL" → "O'Neil", "3rd" → "3Rd"
pub fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut previous_is_letter = false;

    for c in word.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            out.push(c);
            previous_is_letter = false;
        }
    }

    out
}
