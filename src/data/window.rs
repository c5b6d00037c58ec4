/// One padded model input.
/// Sequence format: <start> sub-tokens... <end> <pad>...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWindow {
    pub input_ids:      Vec<u32>,
    /// 1 for start, sub-tokens and end; 0 for padding
    pub attention_mask: Vec<u32>,
    /// 1 only where a word's final sub-token sits
    pub decode_mask:    Vec<u32>,
}

impl TokenWindow {
    /// Pad an unpadded id sequence and its decode mask to `max_len`.
    pub fn padded(mut input_ids: Vec<u32>, mut decode_mask: Vec<u32>, max_len: usize, pad_id: u32) -> Self {
        debug_assert_eq!(input_ids.len(), decode_mask.len());
        debug_assert!(input_ids.len() <= max_len);

        let real_len = input_ids.len();
        let mut attention_mask = vec![1u32; real_len];

        input_ids.resize(max_len, pad_id);
        decode_mask.resize(max_len, 0);
        attention_mask.resize(max_len, 0);

        Self { input_ids, attention_mask, decode_mask }
    }

    pub fn len(&self) -> usize {
        self.input_ids.len()
    }

    /// Number of non-padding positions
    pub fn real_len(&self) -> usize {
        self.attention_mask.iter().filter(|&&m| m == 1).count()
    }

    /// Number of words whose prediction is read from this window
    pub fn word_count(&self) -> usize {
        self.decode_mask.iter().filter(|&&m| m == 1).count()
    }

    /// Positions carrying a word-level prediction, in order
    pub fn decode_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.decode_mask
            .iter()
            .enumerate()
            .filter(|(_, &m)| m == 1)
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_fills_to_max_len() {
        let w = TokenWindow::padded(vec![101, 7, 102], vec![0, 1, 0], 6, 0);
        assert_eq!(w.input_ids, vec![101, 7, 102, 0, 0, 0]);
        assert_eq!(w.attention_mask, vec![1, 1, 1, 0, 0, 0]);
        assert_eq!(w.decode_mask, vec![0, 1, 0, 0, 0, 0]);
        assert_eq!(w.len(), 6);
        assert_eq!(w.real_len(), 3);
    }

    #[test]
    fn test_attention_mask_is_positional_not_by_id() {
        // A real token that happens to share the pad id stays attended
        let w = TokenWindow::padded(vec![0, 0, 2], vec![0, 1, 0], 5, 1);
        assert_eq!(w.attention_mask, vec![1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_decode_positions() {
        let w = TokenWindow::padded(vec![101, 5, 6, 7, 102], vec![0, 0, 1, 1, 0], 8, 0);
        assert_eq!(w.decode_positions().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(w.word_count(), 2);
    }
}
