//! Anonymize command implementation
//!
//! Reads a JSON document from a file or stdin, runs the anonymization
//! engine over it, and writes the result to stdout or a file.

use crate::anonymization::AnonymizationEngine;
use crate::domain::VeilError;
use anyhow::Context;
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input file; reads stdin when omitted or "-"
    pub input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible replacement draws
    #[arg(long, env = "VEIL_SEED")]
    pub seed: Option<u64>,

    /// Print a replacement summary to stderr
    #[arg(long)]
    pub stats: bool,
}

impl AnonymizeArgs {
    /// Execute the anonymize command, returning the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        let input = self.read_input()?;

        let engine = match self.seed {
            Some(seed) => AnonymizationEngine::with_seed(seed),
            None => AnonymizationEngine::new(),
        };

        let (output, summary) = match engine.anonymize_with_summary(&input) {
            Ok(result) => result,
            Err(err @ (VeilError::EmptyInput | VeilError::Parse(_))) => {
                tracing::warn!(error = %err, "Rejected input");
                eprintln!("Error: {err}");
                return Ok(1);
            }
            Err(err) => return Err(err.into()),
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, output.as_bytes())
                    .with_context(|| format!("Failed to write output file: {}", path.display()))?;
                tracing::info!(path = %path.display(), "Anonymized document written");
            }
            None => println!("{output}"),
        }

        if self.stats {
            eprintln!("Tokens processed:  {}", summary.tokens_seen);
            eprintln!("Preserved:         {}", summary.preserved);
            eprintln!("Months replaced:   {}", summary.months_replaced);
            eprintln!("Words replaced:    {}", summary.words_replaced);
            eprintln!("Distinct originals: {}", summary.distinct_originals);
        }

        Ok(0)
    }

    /// Read the raw input text from the configured source
    fn read_input(&self) -> anyhow::Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display())),
            _ => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read stdin")?;
                Ok(buffer)
            }
        }
    }
}
