// ============================================================
// Layer 4 — Token Windower
// ============================================================
// Packs the words of one record into fixed-length windows the
// model can take in a single forward pass.
//
// Every window looks like:
//
//   [start] w1a w1b w2 w3a w3b w3c ... [end] [pad] [pad] ...
//   decode:  0   0   1  1  0   0   1        0    0     0
//
// Rules:
//   - A word's sub-tokens are never split across windows. If a
//     word does not fit (together with the end token) the window
//     closes early and the word opens the next window.
//   - The decode mask marks only the final sub-token of a word;
//     that is where the word's class is read.
//   - A word that alone exceeds the budget (max_len - 2) is
//     force-split: it fills an otherwise empty window and its
//     remaining sub-tokens continue in the next one. Only its
//     last sub-token is marked, so every word still gets exactly
//     one prediction.
//
// Example with max_len = 6, every word one sub-token:
//   Words:    a b c d e
//   Window 1: [start] a b c d [end]
//   Window 2: [start] e [end] [pad] [pad] [pad]

use anyhow::{bail, Result};

use crate::data::window::TokenWindow;
use crate::domain::token_style::SpecialTokens;
use crate::domain::traits::SubwordTokenizer;

/// Smallest window that can hold start, one sub-token and end
pub const MIN_WINDOW_LEN: usize = 3;

pub struct Windower {
    /// Length of every produced window, padding included
    max_len: usize,
    special: SpecialTokens,
}

impl Windower {
    pub fn new(max_len: usize, special: SpecialTokens) -> Result<Self> {
        if max_len < MIN_WINDOW_LEN {
            bail!(
                "Sequence length {} is too short: a window needs at least {} positions",
                max_len,
                MIN_WINDOW_LEN
            );
        }
        Ok(Self { max_len, special })
    }

    /// Sub-token slots available between start and end
    pub fn budget(&self) -> usize {
        self.max_len - 2
    }

    /// Tokenise every word, substituting the unknown token for
    /// words that produce no sub-tokens at all.
    pub fn tokenize_words<T: SubwordTokenizer>(
        &self,
        words:     &[String],
        tokenizer: &T,
    ) -> Result<Vec<Vec<u32>>> {
        words
            .iter()
            .map(|word| {
                let ids = tokenizer.subword_ids(word)?;
                if ids.is_empty() {
                    tracing::debug!("'{}' produced no sub-tokens, using unk", word);
                    Ok(vec![self.special.unk])
                } else {
                    Ok(ids)
                }
            })
            .collect()
    }

    /// Split a record's words into padded windows.
    /// An empty word list gives no windows.
    pub fn windows<T: SubwordTokenizer>(
        &self,
        words:     &[String],
        tokenizer: &T,
    ) -> Result<Vec<TokenWindow>> {
        let pieces = self.tokenize_words(words, tokenizer)?;
        Ok(self.pack(words, &pieces))
    }

    /// Pack pre-tokenised words into windows.
    fn pack(&self, words: &[String], pieces: &[Vec<u32>]) -> Vec<TokenWindow> {
        let mut windows  = Vec::new();
        let mut word_pos = 0usize;
        // Offset into pieces[word_pos]; non-zero only while a
        // force-split word carries over into the next window
        let mut sub_pos  = 0usize;

        while word_pos < pieces.len() {
            let mut ids    = vec![self.special.start];
            let mut decode = vec![0u32];

            while word_pos < pieces.len() {
                let rest = &pieces[word_pos][sub_pos..];

                if ids.len() + rest.len() < self.max_len {
                    // Whole (remaining) word fits with room for the end token
                    ids.extend_from_slice(rest);
                    decode.extend(std::iter::repeat(0).take(rest.len() - 1));
                    decode.push(1);
                    word_pos += 1;
                    sub_pos = 0;
                } else if ids.len() == 1 {
                    // Oversized word at the head of an empty window
                    if sub_pos == 0 {
                        tracing::warn!(
                            "Word '{}' has {} sub-tokens, more than the window budget of {}; splitting it",
                            words.get(word_pos).map(String::as_str).unwrap_or(""),
                            rest.len(),
                            self.budget()
                        );
                    }
                    let take = self.budget();
                    ids.extend_from_slice(&rest[..take]);
                    decode.extend(std::iter::repeat(0).take(take));
                    sub_pos += take;
                    break;
                } else {
                    // Defer the word to the next window
                    break;
                }
            }

            ids.push(self.special.end);
            decode.push(0);

            let window = TokenWindow::padded(ids, decode, self.max_len, self.special.pad);
            tracing::debug!(
                "Window {}: {} real tokens, {} words",
                windows.len(),
                window.real_len(),
                window.word_count()
            );
            windows.push(window);
        }

        windows
    }
}
