// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction, parsed with clap.
// All real work is delegated to Layer 2 (application).
//
//   1. `infer`  — restore punctuation over an input file
//   2. `models` — print the pretrained model registry
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InferArgs, ModelsArgs};

use crate::infra::registry::MODELS;

#[derive(Parser, Debug)]
#[command(
    name = "punctuation-restore",
    version,
    about = "Restore punctuation and casing in raw text with a fine-tuned transformer."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Infer(args)  => Self::run_infer(args),
            Commands::Models(args) => Self::run_models(args),
        }
    }

    fn run_infer(args: InferArgs) -> Result<()> {
        use crate::application::infer_use_case::InferUseCase;

        tracing::info!("Restoring punctuation in: {}", args.user_input);

        let out_file = args.out_file.clone();
        let count = InferUseCase::new(args.into()).execute()?;

        println!("Restored {count} records. Output appended to {out_file}.");
        Ok(())
    }

    fn run_models(args: ModelsArgs) -> Result<()> {
        println!("{}", Self::models_report(args.json)?);
        Ok(())
    }

    /// The registry as a text table, or as pretty JSON
    fn models_report(json: bool) -> Result<String> {
        if json {
            return Ok(serde_json::to_string_pretty(&MODELS[..])?);
        }

        let mut out = format!("{:<32} {:>6}  {:<8} {:>7}", "MODEL", "HIDDEN", "STYLE", "LAYERS");
        for m in MODELS.iter() {
            out.push_str(&format!(
                "\n{:<32} {:>6}  {:<8} {:>7}",
                m.id,
                m.hidden_size,
                m.token_style.name(),
                m.num_layers
            ));
        }
        Ok(out)
    }
}
