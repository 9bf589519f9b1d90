//! Main anonymization engine
//!
//! Orchestrates one anonymization run: validate the raw input, parse it,
//! walk the document with a fresh per-run registry, and pretty-print the
//! result.
//!
//! # Examples
//!
//! ```
//! use veil::anonymization::AnonymizationEngine;
//!
//! # fn example() -> veil::domain::Result<()> {
//! let engine = AnonymizationEngine::new();
//! let output = engine.anonymize(r#"{"note": "Hello World", "count": 5}"#)?;
//! assert!(output.contains("\"count\": 5"));
//! # Ok(())
//! # }
//! ```

use crate::anonymization::registry::ReplacementRegistry;
use crate::anonymization::replacer::{ReplacementStats, WordReplacer};
use crate::anonymization::walker::DocumentWalker;
use crate::anonymization::words::LoremWordSource;
use crate::domain::{Result, VeilError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::Value;

/// Summary of one anonymization run
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RunSummary {
    /// Total tokens processed
    pub tokens_seen: usize,
    /// Tokens passed through unchanged
    pub preserved: usize,
    /// Tokens replaced with a month name
    pub months_replaced: usize,
    /// Tokens replaced with a generic pseudonym
    pub words_replaced: usize,
    /// Distinct original tokens that received a replacement
    pub distinct_originals: usize,
}

impl RunSummary {
    fn from_run(stats: ReplacementStats, distinct_originals: usize) -> Self {
        Self {
            tokens_seen: stats.tokens_seen,
            preserved: stats.preserved,
            months_replaced: stats.months_replaced,
            words_replaced: stats.words_replaced,
            distinct_originals,
        }
    }
}

/// Anonymization engine
///
/// The engine itself is cheap and stateless between runs: every call to
/// [`anonymize`](Self::anonymize) starts from an empty registry, so
/// replacement mappings never leak across invocations, and the engine can
/// be embedded in a long-lived service.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymizationEngine {
    seed: Option<u64>,
}

impl AnonymizationEngine {
    /// Create an engine drawing replacements from OS entropy
    pub fn new() -> Self {
        Self { seed: None }
    }

    /// Create a seeded engine with reproducible replacement draws
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Anonymize one JSON document
    ///
    /// # Behavior
    ///
    /// 1. Fails with [`VeilError::EmptyInput`] if the trimmed input is empty
    /// 2. Fails with [`VeilError::Parse`] if the input is not valid JSON,
    ///    carrying the parser's diagnostic
    /// 3. Otherwise walks the document with a fresh registry and returns
    ///    the result pretty-printed with two-space indentation
    ///
    /// A failed call leaves no state behind; the caller re-invokes with
    /// corrected input.
    pub fn anonymize(&self, input: &str) -> Result<String> {
        self.anonymize_with_summary(input).map(|(output, _)| output)
    }

    /// Anonymize one JSON document and report what was replaced
    pub fn anonymize_with_summary(&self, input: &str) -> Result<(String, RunSummary)> {
        if input.trim().is_empty() {
            return Err(VeilError::EmptyInput);
        }

        let document: Value =
            serde_json::from_str(input).map_err(|e| VeilError::Parse(e.to_string()))?;

        let mut walker = self.walker()?;
        let anonymized = walker.walk(&document);

        let summary = RunSummary::from_run(
            walker.replacer().stats(),
            walker.replacer().registry().len(),
        );
        tracing::debug!(
            tokens_seen = summary.tokens_seen,
            preserved = summary.preserved,
            months_replaced = summary.months_replaced,
            words_replaced = summary.words_replaced,
            distinct_originals = summary.distinct_originals,
            "Anonymization run complete"
        );

        let output = serde_json::to_string_pretty(&anonymized)
            .map_err(|e| VeilError::Serialization(e.to_string()))?;
        Ok((output, summary))
    }

    /// Anonymize an already-parsed document
    ///
    /// Library entry point for callers that hold a [`Value`] and do their
    /// own serialization. Uses a fresh registry like [`anonymize`](Self::anonymize).
    pub fn anonymize_value(&self, document: &Value) -> Result<Value> {
        let mut walker = self.walker()?;
        Ok(walker.walk(document))
    }

    /// Build the per-run walker with a fresh registry
    fn walker(&self) -> Result<DocumentWalker> {
        let (words, rng) = match self.seed {
            Some(seed) => (
                LoremWordSource::with_seed(seed),
                StdRng::seed_from_u64(seed.wrapping_add(1)),
            ),
            None => (LoremWordSource::new(), StdRng::from_entropy()),
        };
        let registry = ReplacementRegistry::new(Box::new(words), rng);
        Ok(DocumentWalker::new(WordReplacer::new(registry)?))
    }
}
