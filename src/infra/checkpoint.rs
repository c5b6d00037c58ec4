// ============================================================
// Layer 6 — Checkpoint Manager
// ============================================================
// Restores fine-tuned model weights with Burn's CompactRecorder.
//
// The weight file is a burn record of PunctuationModel:
//   - named MessagePack, half precision
//   - the recorder sets its own extension (".mpk") on the path
//     it is given
//
// So `--weight-path out/weights` reads out/weights.mpk. A path
// that already carries the record extension is accepted as well.
//
// Loading fails when the record does not match the architecture
// the registry describes for the selected model.
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{bail, Context, Result};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};
use burn::{
    backend::NdArray,
    prelude::*,
    record::{CompactRecorder, FileRecorder, Recorder},
};

use crate::ml::model::PunctuationModel;

/// Extension CompactRecorder puts on every record file, without the dot.
/// It does not depend on the backend.
pub fn record_extension() -> &'static str {
    <CompactRecorder as FileRecorder<NdArray>>::file_extension()
}

pub struct CheckpointManager {
    /// Weight path without the recorder extension
    base: PathBuf,
}

impl CheckpointManager {
    pub fn new(weight_path: impl AsRef<Path>) -> Self {
        let path = weight_path.as_ref();
        let base = if path.extension() == Some(OsStr::new(record_extension())) {
            path.with_extension("")
        } else {
            path.to_path_buf()
        };
        Self { base }
    }

    /// Path handed to the recorder
    pub fn base_path(&self) -> &Path {
        &self.base
    }

    /// The file actually read from disk; the recorder derives it
    /// the same way, with `set_extension`
    pub fn record_path(&self) -> PathBuf {
        self.base.with_extension(record_extension())
    }

    /// Load weights into a freshly initialised model.
    pub fn load_model<B: Backend>(
        &self,
        model:  PunctuationModel<B>,
        device: &B::Device,
    ) -> Result<PunctuationModel<B>> {
        let path = self.record_path();
        if !path.exists() {
            bail!("Model weights not found at '{}'", path.display());
        }

        tracing::info!("Loading model weights from '{}'", path.display());

        let record = CompactRecorder::new()
            .load(self.base_path().to_path_buf(), device)
            .with_context(|| {
                format!(
                    "Cannot load weights '{}'. Does the checkpoint match the selected model?",
                    path.display()
                )
            })?;

        Ok(model.load_record(record))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::tests::{tiny_config, TestBackend};

    #[test]
    fn test_extension_is_not_doubled() {
        let a = CheckpointManager::new("out/weights");
        let b = CheckpointManager::new("out/weights.mpk");
        assert_eq!(record_extension(), "mpk");
        assert_eq!(a.base_path(), Path::new("out/weights"));
        assert_eq!(b.base_path(), Path::new("out/weights"));
        assert_eq!(a.record_path(), PathBuf::from("out/weights.mpk"));
        assert_eq!(b.record_path(), PathBuf::from("out/weights.mpk"));
    }

    #[test]
    fn test_record_path_is_the_file_the_recorder_writes() {
        let device = Default::default();
        let base   = std::env::temp_dir().join("punctuation_restore_ckpt_path_test");

        let model = tiny_config().init::<TestBackend>(&device);
        CompactRecorder::new()
            .record(model.into_record(), base.clone())
            .unwrap();

        let ckpt = CheckpointManager::new(&base);
        assert!(ckpt.record_path().exists(), "{}", ckpt.record_path().display());

        // The full file name resolves to the same record
        let by_file = CheckpointManager::new(ckpt.record_path());
        assert_eq!(by_file.record_path(), ckpt.record_path());

        std::fs::remove_file(ckpt.record_path()).ok();
    }

    #[test]
    fn test_missing_weights_is_an_error() {
        let device = Default::default();
        let model  = tiny_config().init::<TestBackend>(&device);
        let ckpt   = CheckpointManager::new("/definitely/not/here/weights");
        assert!(ckpt.load_model(model, &device).is_err());
    }

    #[test]
    fn test_load_restores_saved_weights() {
        let device = Default::default();
        let base   = std::env::temp_dir().join("punctuation_restore_ckpt_test");

        let saved = tiny_config().init::<TestBackend>(&device);
        CompactRecorder::new()
            .record(saved.clone().into_record(), base.clone())
            .unwrap();

        let fresh  = tiny_config().init::<TestBackend>(&device);
        let ckpt   = CheckpointManager::new(&base);
        let loaded = ckpt.load_model(fresh, &device).unwrap();

        // Records are stored in half precision, so compare with a tolerance
        let before = saved.token_embedding.weight.val();
        let after  = loaded.token_embedding.weight.val();
        let diff: f32 = (before - after).abs().max().into_scalar();
        assert!(diff < 1e-2, "max weight difference {diff}");

        std::fs::remove_file(ckpt.record_path()).ok();
    }
}
