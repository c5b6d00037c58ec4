// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the pretrained HuggingFace tokenizer that matches the
// selected model. Tokenizers are expected on disk as:
//
//   <dir>/<model-id>/tokenizer.json
//
// e.g. pretrained/bert-base-uncased/tokenizer.json
//
// Reference: tokenizers crate documentation

use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tokenizers::Tokenizer;

use crate::domain::traits::SubwordTokenizer;

pub struct TokenizerStore {
    dir: PathBuf,
}

impl TokenizerStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Where the tokenizer of `model_id` is expected
    pub fn path_for(&self, model_id: &str) -> PathBuf {
        self.dir.join(model_id).join("tokenizer.json")
    }

    /// Load the tokenizer of `model_id` from its JSON file
    pub fn load(&self, model_id: &str) -> Result<Tokenizer> {
        let path = self.path_for(model_id);
        let tokenizer = Tokenizer::from_file(&path)
            .map_err(|e| anyhow!(
                "Cannot load tokenizer for '{}' from '{}': {}", model_id, path.display(), e
            ))?;
        tracing::info!("Tokenizer loaded from '{}'", path.display());
        Ok(tokenizer)
    }
}

/// A word is encoded on its own, without special tokens; the
/// windower adds start/end itself.
impl SubwordTokenizer for Tokenizer {
    fn subword_ids(&self, word: &str) -> Result<Vec<u32>> {
        let enc = self
            .encode(word, false)
            .map_err(|e| anyhow!("Tokenise '{word}': {e}"))?;
        Ok(enc.get_ids().to_vec())
    }
}
