// ============================================================
// Layer 4 — Prediction Decoder
// ============================================================
// Turns per-position class predictions back into text.
//
// For every window, in order, only positions whose decode mask
// is 1 are read. Each such position belongs to the next word of
// the record, so a single cursor walks the original words across
// all windows:
//
//   decode mask: 0 1 0 1 0 0 0     predictions: 0 2 0 4 ...
//   words:       ["hello", "london"]
//   output:      "hello. London. "

use anyhow::{bail, Result};

use crate::data::window::TokenWindow;
use crate::domain::punctuation::PunctuationClass;

pub struct Decoder<'a> {
    /// Words in their original case
    words:  &'a [String],
    /// Index of the next word to consume
    cursor: usize,
    output: String,
}

impl<'a> Decoder<'a> {
    pub fn new(words: &'a [String]) -> Self {
        Self { words, cursor: 0, output: String::new() }
    }

    /// Consume the predictions of one window.
    /// `predictions` must hold one class index per window position.
    pub fn push_window(&mut self, window: &TokenWindow, predictions: &[usize]) -> Result<()> {
        if predictions.len() != window.len() {
            bail!(
                "Got {} predictions for a window of {} positions",
                predictions.len(),
                window.len()
            );
        }

        for pos in window.decode_positions() {
            let Some(word) = self.words.get(self.cursor) else {
                bail!(
                    "Window marks more words than the record has ({})",
                    self.words.len()
                );
            };
            let class = PunctuationClass::from_index(predictions[pos])?;
            self.output.push_str(&class.render(word));
            self.output.push(' ');
            self.cursor += 1;
        }

        Ok(())
    }

    /// Finish decoding and return the reconstructed text.
    pub fn finish(self) -> Result<String> {
        if self.cursor != self.words.len() {
            bail!(
                "Decoded {} of {} words; windows and record are out of step",
                self.cursor,
                self.words.len()
            );
        }
        Ok(self.output)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    fn window(decode_mask: Vec<u32>) -> TokenWindow {
        let n = decode_mask.len();
        TokenWindow {
            input_ids:      vec![1; n],
            attention_mask: vec![1; n],
            decode_mask,
        }
    }

    #[test]
    fn test_all_plain_keeps_text() {
        let ws  = words("hello world");
        let mut d = Decoder::new(&ws);
        d.push_window(&window(vec![0, 1, 1, 0, 0]), &[0; 5]).unwrap();
        assert_eq!(d.finish().unwrap(), "hello world ");
    }

    #[test]
    fn test_period_and_capitalized_period() {
        let ws  = words("hello london");
        let mut d = Decoder::new(&ws);
        d.push_window(&window(vec![0, 1, 1, 0]), &[3, 2, 4, 5]).unwrap();
        assert_eq!(d.finish().unwrap(), "hello. London. ");
    }

    #[test]
    fn test_sub_token_predictions_are_ignored() {
        // Position 1 is a non-final sub-token; its class 5 must not leak
        let ws  = words("unbelievable");
        let mut d = Decoder::new(&ws);
        d.push_window(&window(vec![0, 0, 1, 0]), &[0, 5, 1, 0]).unwrap();
        assert_eq!(d.finish().unwrap(), "unbelievable, ");
    }

    #[test]
    fn test_cursor_runs_across_windows() {
        let ws  = words("one two three");
        let mut d = Decoder::new(&ws);
        d.push_window(&window(vec![0, 1, 1, 0]), &[0, 0, 1, 0]).unwrap();
        d.push_window(&window(vec![0, 1, 0, 0]), &[0, 4, 0, 0]).unwrap();
        assert_eq!(d.finish().unwrap(), "one two, Three. ");
    }

    #[test]
    fn test_original_case_is_preserved() {
        let ws  = words("NASA iPhone");
        let mut d = Decoder::new(&ws);
        d.push_window(&window(vec![0, 1, 1, 0]), &[0, 1, 2, 0]).unwrap();
        assert_eq!(d.finish().unwrap(), "NASA, iPhone. ");
    }

    #[test]
    fn test_unknown_class_is_an_error() {
        let ws  = words("x");
        let mut d = Decoder::new(&ws);
        assert!(d.push_window(&window(vec![0, 1, 0]), &[0, 9, 0]).is_err());
    }

    #[test]
    fn test_prediction_length_mismatch_is_an_error() {
        let ws  = words("x");
        let mut d = Decoder::new(&ws);
        assert!(d.push_window(&window(vec![0, 1, 0]), &[0, 0]).is_err());
    }

    #[test]
    fn test_missing_words_is_an_error() {
        let ws  = words("a b");
        let mut d = Decoder::new(&ws);
        d.push_window(&window(vec![0, 1, 0]), &[0; 3]).unwrap();
        assert!(d.finish().is_err());
    }
}
