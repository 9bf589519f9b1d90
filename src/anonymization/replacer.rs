//! Per-token replacement dispatch

use crate::anonymization::classifier::{Classifier, TokenClass};
use crate::anonymization::registry::{ReplacementKind, ReplacementRegistry};
use crate::domain::Result;
use serde::Serialize;

/// Counters for what happened to the tokens of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplacementStats {
    /// Total tokens processed
    pub tokens_seen: usize,
    /// Tokens passed through unchanged (URLs, numbers, blanks, N/A)
    pub preserved: usize,
    /// Tokens replaced with a month name
    pub months_replaced: usize,
    /// Tokens replaced with a generic pseudonym
    pub words_replaced: usize,
}

/// Produces the substitute for one token
///
/// The single dispatch point between classification and the registry: no
/// other component inspects token content. URL, numeric, and blank tokens
/// pass through unchanged; months and generic words go through the
/// registry so repeats stay consistent.
pub struct WordReplacer {
    classifier: Classifier,
    registry: ReplacementRegistry,
    stats: ReplacementStats,
}

impl WordReplacer {
    /// Create a replacer around a fresh per-run registry
    ///
    /// # Errors
    ///
    /// Returns an error if the classifier patterns fail to compile.
    pub fn new(registry: ReplacementRegistry) -> Result<Self> {
        Ok(Self {
            classifier: Classifier::new()?,
            registry,
            stats: ReplacementStats::default(),
        })
    }

    /// Replace one token according to its class
    pub fn replace(&mut self, token: &str) -> String {
        self.stats.tokens_seen += 1;
        match self.classifier.classify(token) {
            TokenClass::Url | TokenClass::Numeric | TokenClass::Blank => {
                self.stats.preserved += 1;
                token.to_string()
            }
            TokenClass::Month => {
                self.stats.months_replaced += 1;
                self.registry.get_or_create(token, ReplacementKind::Month)
            }
            TokenClass::Generic => {
                self.stats.words_replaced += 1;
                self.registry.get_or_create(token, ReplacementKind::Generic)
            }
        }
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> ReplacementStats {
        self.stats
    }

    /// The run's registry
    pub fn registry(&self) -> &ReplacementRegistry {
        &self.registry
    }
}
