// ============================================================
// Layer 3 — Token Styles
// ============================================================
// Each tokenizer family reserves different ids for its special
// tokens. The windower needs four of them:
//
//   style    │ start │ end │ pad │ unk
//   ─────────┼───────┼─────┼─────┼─────
//   bert     │  101  │ 102 │  0  │ 100     [CLS] [SEP] [PAD] [UNK]
//   roberta  │   0   │  2  │  1  │  3      <s> </s> <pad> <unk>
//   xlm      │   0   │  2  │  1  │  3      <s> </s> <pad> <unk>

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStyle {
    Bert,
    Roberta,
    Xlm,
}

/// Special token ids of one tokenizer family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialTokens {
    pub start: u32,
    pub end:   u32,
    pub pad:   u32,
    pub unk:   u32,
}

impl TokenStyle {
    pub fn special_tokens(self) -> SpecialTokens {
        match self {
            TokenStyle::Bert => SpecialTokens { start: 101, end: 102, pad: 0, unk: 100 },
            TokenStyle::Roberta | TokenStyle::Xlm => {
                SpecialTokens { start: 0, end: 2, pad: 1, unk: 3 }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenStyle::Bert    => "bert",
            TokenStyle::Roberta => "roberta",
            TokenStyle::Xlm     => "xlm",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bert_ids() {
        let t = TokenStyle::Bert.special_tokens();
        assert_eq!((t.start, t.end, t.pad, t.unk), (101, 102, 0, 100));
    }

    #[test]
    fn test_roberta_family_shares_ids() {
        assert_eq!(
            TokenStyle::Roberta.special_tokens(),
            TokenStyle::Xlm.special_tokens()
        );
    }
}
