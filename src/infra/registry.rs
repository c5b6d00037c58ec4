// ============================================================
// Layer 6 — Model Registry
// ============================================================
// The lookup table from a pretrained model identifier to
// everything needed to rebuild the model and its tokenizer:
//
//   id                              hidden  style    family
//   bert-base-uncased                  768  bert     BERT
//   bert-base-cased                    768  bert     BERT
//   bert-large-uncased                1024  bert     BERT
//   bert-base-multilingual-uncased     768  bert     BERT
//   roberta-base                       768  roberta  RoBERTa
//   roberta-large                     1024  roberta  RoBERTa
//   xlm-roberta-base                   768  xlm      RoBERTa
//
// The table is static; nothing mutates it after startup.

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::domain::token_style::{SpecialTokens, TokenStyle};
use crate::ml::model::PunctuationModelConfig;

/// Encoder families differ in position ids and LayerNorm epsilon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EncoderFamily {
    Bert,
    Roberta,
}

impl EncoderFamily {
    fn layer_norm_eps(self) -> f64 {
        match self {
            EncoderFamily::Bert    => 1e-12,
            EncoderFamily::Roberta => 1e-5,
        }
    }

    /// RoBERTa position ids start right after the padding id
    fn position_offset(self, special: SpecialTokens) -> usize {
        match self {
            EncoderFamily::Bert    => 0,
            EncoderFamily::Roberta => special.pad as usize + 1,
        }
    }
}

/// One row of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelSpec {
    pub id:              &'static str,
    /// Output embedding dimension of the encoder
    pub hidden_size:     usize,
    pub token_style:     TokenStyle,
    pub family:          EncoderFamily,
    pub vocab_size:      usize,
    pub num_layers:      usize,
    pub num_heads:       usize,
    pub d_ff:            usize,
    pub max_position:    usize,
    pub type_vocab_size: usize,
}

const fn bert(id: &'static str, hidden_size: usize, num_layers: usize, num_heads: usize, vocab_size: usize) -> ModelSpec {
    ModelSpec {
        id,
        hidden_size,
        token_style: TokenStyle::Bert,
        family: EncoderFamily::Bert,
        vocab_size,
        num_layers,
        num_heads,
        d_ff: hidden_size * 4,
        max_position: 512,
        type_vocab_size: 2,
    }
}

const fn roberta(id: &'static str, style: TokenStyle, hidden_size: usize, num_layers: usize, num_heads: usize, vocab_size: usize) -> ModelSpec {
    ModelSpec {
        id,
        hidden_size,
        token_style: style,
        family: EncoderFamily::Roberta,
        vocab_size,
        num_layers,
        num_heads,
        d_ff: hidden_size * 4,
        max_position: 514,
        type_vocab_size: 1,
    }
}

pub static MODELS: [ModelSpec; 7] = [
    bert("bert-base-uncased", 768, 12, 12, 30522),
    bert("bert-base-cased", 768, 12, 12, 28996),
    bert("bert-large-uncased", 1024, 24, 16, 30522),
    bert("bert-base-multilingual-uncased", 768, 12, 12, 105879),
    roberta("roberta-base", TokenStyle::Roberta, 768, 12, 12, 50265),
    roberta("roberta-large", TokenStyle::Roberta, 1024, 24, 16, 50265),
    roberta("xlm-roberta-base", TokenStyle::Xlm, 768, 12, 12, 250002),
];

/// Look up a model identifier.
pub fn lookup(id: &str) -> Result<&'static ModelSpec> {
    MODELS.iter().find(|m| m.id == id).ok_or_else(|| {
        anyhow!(
            "Unknown pretrained model '{}'. Known models: {}",
            id,
            MODELS.iter().map(|m| m.id).collect::<Vec<_>>().join(", ")
        )
    })
}

impl ModelSpec {
    pub fn special_tokens(&self) -> SpecialTokens {
        self.token_style.special_tokens()
    }

    /// Longest window the position table can hold
    pub fn max_window_len(&self) -> usize {
        self.max_position - self.family.position_offset(self.special_tokens())
    }

    /// Architecture of the full classifier. `lstm_dim` of None
    /// means "same as the encoder hidden size".
    pub fn model_config(&self, lstm_dim: Option<usize>, num_classes: usize) -> PunctuationModelConfig {
        PunctuationModelConfig::new(
            self.vocab_size,
            self.max_position,
            self.type_vocab_size,
            self.hidden_size,
            self.num_heads,
            self.num_layers,
            self.d_ff,
            lstm_dim.unwrap_or(self.hidden_size),
            num_classes,
        )
        .with_position_offset(self.family.position_offset(self.special_tokens()))
        .with_layer_norm_eps(self.family.layer_norm_eps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_model() {
        let spec = lookup("bert-base-uncased").unwrap();
        assert_eq!(spec.hidden_size, 768);
        assert_eq!(spec.token_style, TokenStyle::Bert);
        assert_eq!(spec.special_tokens().start, 101);
    }

    #[test]
    fn test_lookup_unknown_model_lists_known_ids() {
        let err = lookup("gpt-2").unwrap_err().to_string();
        assert!(err.contains("gpt-2"));
        assert!(err.contains("bert-base-uncased"));
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in MODELS.iter().enumerate() {
            assert!(MODELS[i + 1..].iter().all(|b| b.id != a.id));
        }
    }

    #[test]
    fn test_lstm_dim_defaults_to_hidden_size() {
        let spec = lookup("bert-large-uncased").unwrap();
        assert_eq!(spec.model_config(None, 6).lstm_dim, 1024);
        assert_eq!(spec.model_config(Some(256), 6).lstm_dim, 256);
    }

    #[test]
    fn test_roberta_positions_start_after_pad() {
        let spec = lookup("roberta-base").unwrap();
        let cfg  = spec.model_config(None, 6);
        assert_eq!(cfg.position_offset, 2);
        assert_eq!(spec.max_window_len(), 512);
        assert_eq!(lookup("bert-base-cased").unwrap().max_window_len(), 512);
    }
}
