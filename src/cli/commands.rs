// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `infer` and `models`, and all
// their flags. Flag names and defaults follow the inference
// script the fine-tuned checkpoints were published with.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{ArgAction, Args, Subcommand};
use crate::application::infer_use_case::InferConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Restore punctuation and casing for every line of an input file
    Infer(InferArgs),

    /// List the pretrained models this build knows about
    Models(ModelsArgs),
}

/// Anything but a case-insensitive "true" switches the option off
fn parse_switch(s: &str) -> Result<bool, String> {
    Ok(s.eq_ignore_ascii_case("true"))
}

/// All arguments for the `infer` command.
#[derive(Args, Debug)]
pub struct InferArgs {
    /// Use the GPU if available (true/false)
    #[arg(long, action = ArgAction::Set, default_value = "true", value_parser = parse_switch)]
    pub cuda: bool,

    /// Pretrained language model identifier
    #[arg(long, default_value = "bert-base-uncased")]
    pub pretrained_model: String,

    /// Hidden dimension of the LSTM layer; -1 uses the language
    /// model's hidden dimension
    #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
    pub lstm_dim: i64,

    /// Path to the CSV file with the text to punctuate
    #[arg(long, default_value = "test_en.txt")]
    pub user_input: String,

    /// Model weights (burn CompactRecorder record; the ".mpk"
    /// extension may be left out)
    #[arg(long, default_value = "out/weights")]
    pub weight_path: String,

    /// Length of every token window fed to the model
    #[arg(long, default_value_t = 256)]
    pub sequence_length: usize,

    /// File the restored lines are appended to
    #[arg(long, default_value = "data/inference-result.txt")]
    pub out_file: String,

    /// Directory holding <model-id>/tokenizer.json
    #[arg(long, default_value = "pretrained")]
    pub tokenizer_dir: String,

    /// Name of the CSV column that holds the text
    #[arg(long, default_value = "01_nb")]
    pub text_column: String,

    /// Number of output classes of the classification head
    #[arg(long, default_value_t = 6)]
    pub num_classes: usize,

    /// Windows per forward pass
    #[arg(long, default_value_t = 1)]
    pub batch_size: usize,
}

/// The application layer never sees clap types.
impl From<InferArgs> for InferConfig {
    fn from(a: InferArgs) -> Self {
        InferConfig {
            use_gpu:          a.cuda,
            pretrained_model: a.pretrained_model,
            lstm_dim:         a.lstm_dim,
            user_input:       a.user_input,
            weight_path:      a.weight_path,
            sequence_length:  a.sequence_length,
            out_file:         a.out_file,
            tokenizer_dir:    a.tokenizer_dir,
            text_column:      a.text_column,
            num_classes:      a.num_classes,
            batch_size:       a.batch_size,
        }
    }
}

/// Arguments for the `models` command
#[derive(Args, Debug)]
pub struct ModelsArgs {
    /// Print the registry as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn infer_args(argv: &[&str]) -> InferArgs {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Infer(args) => args,
            other => panic!("expected infer, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_match_infer_config_defaults() {
        let cfg: InferConfig = infer_args(&["punctuation-restore", "infer"]).into();
        let def = InferConfig::default();
        assert_eq!(cfg.use_gpu, def.use_gpu);
        assert_eq!(cfg.pretrained_model, def.pretrained_model);
        assert_eq!(cfg.lstm_dim, def.lstm_dim);
        assert_eq!(cfg.user_input, def.user_input);
        assert_eq!(cfg.weight_path, def.weight_path);
        assert_eq!(cfg.sequence_length, def.sequence_length);
        assert_eq!(cfg.out_file, def.out_file);
        assert_eq!(cfg.text_column, def.text_column);
        assert_eq!(cfg.num_classes, def.num_classes);
    }

    #[test]
    fn test_cuda_switch_values() {
        assert!(infer_args(&["p", "infer", "--cuda", "TRUE"]).cuda);
        assert!(!infer_args(&["p", "infer", "--cuda", "false"]).cuda);
        assert!(!infer_args(&["p", "infer", "--cuda", "yes"]).cuda);
    }

    #[test]
    fn test_negative_lstm_dim_is_accepted() {
        assert_eq!(infer_args(&["p", "infer", "--lstm-dim", "-1"]).lstm_dim, -1);
        assert_eq!(infer_args(&["p", "infer", "--lstm-dim", "128"]).lstm_dim, 128);
    }
}
