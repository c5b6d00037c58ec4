// ============================================================
// Layer 4 — Window Batcher
// ============================================================
// Implements Burn's Batcher trait to convert a Vec<TokenWindow>
// into tensors for one forward pass.
//
// How batching works here:
//   Input:  Vec of N TokenWindows, each of length S
//   Output: WindowBatch with tensors of shape [N, S]
//
//   All ids are flattened into one long Vec, then reshaped:
//   [w1_t1, w1_t2, ..., w1_tS, w2_t1, ..., wN_tS] → [N, S]
//
// Windows are padded to the same length by the windower, so no
// dynamic padding happens here. The decode mask stays on the
// host; only the decoder reads it.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::data::window::TokenWindow;

// ─── WindowBatch ──────────────────────────────────────────────────────────────
/// A stack of windows ready for the model forward pass.
#[derive(Debug, Clone)]
pub struct WindowBatch<B: Backend> {
    /// Token ids — shape: [batch_size, seq_len]
    pub input_ids: Tensor<B, 2, Int>,

    /// Attention mask — shape: [batch_size, seq_len]
    /// 1 = real token, 0 = padding
    pub attention_mask: Tensor<B, 2, Int>,
}

// ─── WindowBatcher ────────────────────────────────────────────────────────────
/// Holds the target device so tensors are created on the
/// selected GPU/CPU.
#[derive(Clone, Debug)]
pub struct WindowBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> WindowBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<TokenWindow, WindowBatch<B>> for WindowBatcher<B> {
    fn batch(&self, items: Vec<TokenWindow>) -> WindowBatch<B> {
        let batch_size = items.len();
        let seq_len    = items.first().map(TokenWindow::len).unwrap_or(0);

        // Burn Int tensors are built from i32 slices
        let ids_flat: Vec<i32> = items
            .iter()
            .flat_map(|w| w.input_ids.iter().map(|&x| x as i32))
            .collect();

        let mask_flat: Vec<i32> = items
            .iter()
            .flat_map(|w| w.attention_mask.iter().map(|&x| x as i32))
            .collect();

        let input_ids = Tensor::<B, 1, Int>::from_ints(
            ids_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        let attention_mask = Tensor::<B, 1, Int>::from_ints(
            mask_flat.as_slice(), &self.device
        ).reshape([batch_size, seq_len]);

        WindowBatch { input_ids, attention_mask }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    #[test]
    fn test_batch_shapes_and_values() {
        let device  = Default::default();
        let batcher = WindowBatcher::<NdArray>::new(device);

        let windows = vec![
            TokenWindow::padded(vec![101, 7, 102], vec![0, 1, 0], 5, 0),
            TokenWindow::padded(vec![101, 8, 9, 102], vec![0, 0, 1, 0], 5, 0),
        ];
        let batch = batcher.batch(windows);

        assert_eq!(batch.input_ids.dims(), [2, 5]);
        assert_eq!(batch.attention_mask.dims(), [2, 5]);

        let ids: Vec<i64> = batch.input_ids.into_data().iter::<i64>().collect();
        assert_eq!(ids, vec![101, 7, 102, 0, 0, 101, 8, 9, 102, 0]);

        let mask: Vec<i64> = batch.attention_mask.into_data().iter::<i64>().collect();
        assert_eq!(mask, vec![1, 1, 1, 0, 0, 1, 1, 1, 1, 0]);
    }
}
