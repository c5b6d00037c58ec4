// ============================================================
// Layer 2 — InferUseCase
// ============================================================
// Orchestrates a punctuation restoration run:
//
//   Step 1: Look up the pretrained model       (Layer 6 - infra)
//   Step 2: Validate the run configuration
//   Step 3: Load the tokenizer                 (Layer 6 - infra)
//   Step 4: Pick the device, load the weights  (Layer 5 - ml)
//   Step 5: For every input record:
//             strip → window → predict → decode → append
//
// Everything loaded in steps 1–4 is built once and passed by
// reference into the per-record pipeline (Restorer).

use anyhow::{bail, Context, Result};
use burn::prelude::*;

use crate::data::{
    decoder::Decoder,
    preprocessor::Preprocessor,
    reader::CsvRecordReader,
    windower::{Windower, MIN_WINDOW_LEN},
};
use crate::domain::punctuation::PunctuationClass;
use crate::domain::record::OutputRecord;
use crate::domain::traits::{PunctuationPredictor, RecordSink, RecordSource, SubwordTokenizer};
use crate::infra::{
    checkpoint::CheckpointManager,
    registry::{self, ModelSpec},
    result_writer::ResultWriter,
    tokenizer_store::TokenizerStore,
};
use crate::ml::{inferencer::Inferencer, model::PunctuationModelConfig};

// ─── Inference Configuration ─────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct InferConfig {
    /// Prefer the GPU (wgpu) backend over the CPU (ndarray) one
    pub use_gpu:          bool,
    pub pretrained_model: String,
    /// BiLSTM hidden size; -1 means "same as the encoder"
    pub lstm_dim:         i64,
    pub user_input:       String,
    pub weight_path:      String,
    pub sequence_length:  usize,
    pub out_file:         String,
    pub tokenizer_dir:    String,
    pub text_column:      String,
    pub num_classes:      usize,
    pub batch_size:       usize,
}

impl Default for InferConfig {
    fn default() -> Self {
        Self {
            use_gpu:          true,
            pretrained_model: "bert-base-uncased".to_string(),
            lstm_dim:         -1,
            user_input:       "test_en.txt".to_string(),
            weight_path:      "out/weights".to_string(),
            sequence_length:  256,
            out_file:         "data/inference-result.txt".to_string(),
            tokenizer_dir:    "pretrained".to_string(),
            text_column:      "01_nb".to_string(),
            num_classes:      PunctuationClass::ALL.len(),
            batch_size:       1,
        }
    }
}

impl InferConfig {
    /// The LSTM override, or None when it follows the encoder
    pub fn lstm_override(&self) -> Option<usize> {
        usize::try_from(self.lstm_dim).ok()
    }

    /// Check the configuration against the selected model.
    pub fn validate(&self, spec: &ModelSpec) -> Result<()> {
        if self.sequence_length < MIN_WINDOW_LEN {
            bail!(
                "--sequence-length {} is too short (minimum {})",
                self.sequence_length,
                MIN_WINDOW_LEN
            );
        }
        if self.sequence_length > spec.max_window_len() {
            bail!(
                "--sequence-length {} exceeds the {} position limit of '{}'",
                self.sequence_length,
                spec.max_window_len(),
                spec.id
            );
        }
        if self.lstm_dim == 0 || self.lstm_dim < -1 {
            bail!("--lstm-dim must be positive, or -1 to follow the encoder (got {})", self.lstm_dim);
        }
        if self.num_classes == 0 || self.num_classes > PunctuationClass::ALL.len() {
            bail!(
                "--num-classes must be between 1 and {} (got {})",
                PunctuationClass::ALL.len(),
                self.num_classes
            );
        }
        if self.batch_size == 0 {
            bail!("--batch-size must be at least 1");
        }
        Ok(())
    }

    pub fn model_config(&self, spec: &ModelSpec) -> PunctuationModelConfig {
        spec.model_config(self.lstm_override(), self.num_classes)
    }
}

// ─── Restorer ────────────────────────────────────────────────────────────────
/// The per-record pipeline. Borrows the loaded tokenizer and
/// predictor; owns only cheap, stateless helpers.
pub struct Restorer<'a, T: SubwordTokenizer, P: PunctuationPredictor> {
    preprocessor: Preprocessor,
    windower:     Windower,
    tokenizer:    &'a T,
    predictor:    &'a P,
}

impl<'a, T: SubwordTokenizer, P: PunctuationPredictor> Restorer<'a, T, P> {
    pub fn new(windower: Windower, tokenizer: &'a T, predictor: &'a P) -> Self {
        Self {
            preprocessor: Preprocessor::new(),
            windower,
            tokenizer,
            predictor,
        }
    }

    /// Restore punctuation and casing of a single line.
    pub fn restore_line(&self, line: &str) -> Result<OutputRecord> {
        let prepared = self.preprocessor.prepare(line);
        let windows  = self.windower.windows(&prepared.lower_words, self.tokenizer)?;

        let predictions = if windows.is_empty() {
            Vec::new()
        } else {
            self.predictor.predict(&windows)?
        };
        if predictions.len() != windows.len() {
            bail!(
                "Predictor returned {} rows for {} windows",
                predictions.len(),
                windows.len()
            );
        }

        tracing::debug!(
            "{} words in {} window(s)",
            prepared.word_count(),
            windows.len()
        );

        let mut decoder = Decoder::new(&prepared.original_words);
        for (window, preds) in windows.iter().zip(&predictions) {
            decoder.push_window(window, preds)?;
        }

        Ok(OutputRecord::new(prepared.cleaned, decoder.finish()?))
    }

    /// Restore every record of `source` into `sink`, one at a time:
    /// each record is stored before the next one is read.
    /// Returns the number of records stored.
    pub fn run<S: RecordSource, K: RecordSink>(&self, source: &S, sink: &K) -> Result<usize> {
        let mut count = 0usize;

        for record in source.records()? {
            let record = record?;
            let output = self
                .restore_line(&record.text)
                .with_context(|| format!("Failed to restore record {}", record.index))?;

            tracing::info!("Storing punctuated text - {}", count);
            sink.store(&output)?;
            count += 1;
        }

        Ok(count)
    }
}

// ─── InferUseCase ─────────────────────────────────────────────────────────────
pub struct InferUseCase {
    config: InferConfig,
}

impl InferUseCase {
    pub fn new(config: InferConfig) -> Self {
        Self { config }
    }

    /// Execute the full run end to end. Returns the record count.
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        // ── Step 1 + 2: Model lookup and validation ──────────────────────────
        let spec = registry::lookup(&cfg.pretrained_model)?;
        cfg.validate(spec)?;
        let model_cfg = cfg.model_config(spec);
        tracing::info!(
            "Model '{}': hidden={}, lstm={}, classes={}, style={}",
            spec.id,
            spec.hidden_size,
            model_cfg.lstm_dim,
            model_cfg.num_classes,
            spec.token_style.name()
        );

        // ── Step 3: Tokenizer ────────────────────────────────────────────────
        let tokenizer = TokenizerStore::new(&cfg.tokenizer_dir).load(spec.id)?;

        // ── Step 4 + 5: Device, weights and the record loop ──────────────────
        if cfg.use_gpu {
            let device = burn::backend::wgpu::WgpuDevice::default();
            tracing::info!("Using WGPU device: {:?}", device);
            self.run_on::<burn::backend::Wgpu>(spec, &tokenizer, &model_cfg, device)
        } else {
            let device = burn::backend::ndarray::NdArrayDevice::Cpu;
            tracing::info!("Using CPU device");
            self.run_on::<burn::backend::NdArray>(spec, &tokenizer, &model_cfg, device)
        }
    }

    fn run_on<B: Backend>(
        &self,
        spec:      &ModelSpec,
        tokenizer: &tokenizers::Tokenizer,
        model_cfg: &PunctuationModelConfig,
        device:    B::Device,
    ) -> Result<usize> {
        let cfg = &self.config;

        tracing::info!("Loading model for inference");
        let ckpt       = CheckpointManager::new(&cfg.weight_path);
        let inferencer = Inferencer::<B>::from_checkpoint(&ckpt, model_cfg, device, cfg.batch_size)?;
        tracing::info!("Done");

        let windower = Windower::new(cfg.sequence_length, spec.special_tokens())?;
        let restorer = Restorer::new(windower, tokenizer, &inferencer);

        let reader = CsvRecordReader::new(&cfg.user_input, &cfg.text_column);
        let writer = ResultWriter::new(&cfg.out_file)?;

        let count = restorer.run(&reader, &writer)?;
        tracing::info!("Restored {} records into '{}'", count, writer.path().display());
        Ok(count)
    }
}
