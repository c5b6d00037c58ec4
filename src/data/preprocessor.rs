// ============================================================
// Layer 4 — Text Preprocessor
// ============================================================
// Prepares a raw input line for windowing.
//
// The classifier was trained on unpunctuated text, so whatever
// punctuation the line already carries is removed first:
//
//   ,  :  -  –  .  !  ;  ?
//
// The cleaned line is then split on whitespace twice over:
//   - original-case words, used when rebuilding the output
//   - lower-cased words, fed to the tokenizer
//
// Reference: Rust Book §8 (Strings in Rust)
//            Rust Book §13 (Iterators)

/// Characters removed from every line before processing
pub const STRIPPED_CHARS: [char; 8] = [',', ':', '-', '–', '.', '!', ';', '?'];

/// A cleaned line and its two word views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedLine {
    /// The line with punctuation removed (whitespace untouched)
    pub cleaned:        String,
    /// Words as they appear in `cleaned`
    pub original_words: Vec<String>,
    /// Lower-cased words, one per original word
    pub lower_words:    Vec<String>,
}

impl PreparedLine {
    pub fn word_count(&self) -> usize {
        self.original_words.len()
    }
}

pub struct Preprocessor;

impl Preprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Remove the stripped punctuation characters from a line.
    pub fn strip_punctuation(&self, line: &str) -> String {
        line.chars().filter(|c| !STRIPPED_CHARS.contains(c)).collect()
    }

    /// Clean a line and split it into word views.
    pub fn prepare(&self, line: &str) -> PreparedLine {
        let cleaned = self.strip_punctuation(line);

        let original_words: Vec<String> = cleaned
            .split_whitespace()
            .map(str::to_string)
            .collect();

        // Lower-case per word so both views always line up one to one
        let lower_words = original_words.iter().map(|w| w.to_lowercase()).collect();

        PreparedLine { cleaned, original_words, lower_words }
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}
