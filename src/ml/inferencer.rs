// ============================================================
// Layer 5 — Inferencer
// ============================================================
use anyhow::Result;
use burn::{data::dataloader::batcher::Batcher, prelude::*};

use crate::data::batcher::WindowBatcher;
use crate::data::window::TokenWindow;
use crate::domain::traits::PunctuationPredictor;
use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{PunctuationModel, PunctuationModelConfig};

pub struct Inferencer<B: Backend> {
    model:      PunctuationModel<B>,
    batcher:    WindowBatcher<B>,
    /// Windows stacked into one forward pass
    batch_size: usize,
}

impl<B: Backend> Inferencer<B> {
    pub fn new(model: PunctuationModel<B>, device: B::Device, batch_size: usize) -> Self {
        Self {
            model,
            batcher: WindowBatcher::new(device),
            batch_size: batch_size.max(1),
        }
    }

    /// Build the architecture from `model_cfg` and fill it with the
    /// checkpoint's weights.
    pub fn from_checkpoint(
        ckpt_manager: &CheckpointManager,
        model_cfg:    &PunctuationModelConfig,
        device:       B::Device,
        batch_size:   usize,
    ) -> Result<Self> {
        let model: PunctuationModel<B> = model_cfg.init(&device);
        let model = ckpt_manager.load_model(model, &device)?;
        tracing::info!("Model loaded from '{}'", ckpt_manager.record_path().display());
        Ok(Self::new(model, device, batch_size))
    }
}

impl<B: Backend> PunctuationPredictor for Inferencer<B> {
    fn predict(&self, windows: &[TokenWindow]) -> Result<Vec<Vec<usize>>> {
        let mut out = Vec::with_capacity(windows.len());

        for chunk in windows.chunks(self.batch_size) {
            let seq_len = chunk[0].len();
            let batch   = self.batcher.batch(chunk.to_vec());

            let classes: Vec<usize> = self.model
                .predict(batch.input_ids, batch.attention_mask)
                .into_data()
                .iter::<i64>()
                .map(|c| c as usize)
                .collect();

            out.extend(classes.chunks(seq_len).map(<[usize]>::to_vec));
            tracing::debug!("Forward pass over {} window(s)", chunk.len());
        }

        Ok(out)
    }
}
