//! JSON anonymization engine
//!
//! This module implements the core of Veil: classify each token of every
//! string leaf, replace ordinary words and month names with synthetic
//! stand-ins, and keep replacements consistent per run through a
//! per-run registry.
//!
//! # Architecture
//!
//! The pipeline, leaf-first:
//! - **Classifier**: assigns a token to URL / Numeric / Blank / Month / Generic
//! - **ReplacementRegistry**: per-run original -> replacement store
//! - **WordReplacer**: single dispatch point combining the two
//! - **DocumentWalker**: structure-preserving recursion over the document
//! - **AnonymizationEngine**: run orchestration around the walker
//!
//! # Usage
//!
//! ```
//! use veil::anonymization::AnonymizationEngine;
//!
//! # fn example() -> veil::domain::Result<()> {
//! let engine = AnonymizationEngine::new();
//! let output = engine.anonymize(r#"{"city": "Springfield"}"#)?;
//! # Ok(())
//! # }
//! ```

pub mod calendar;
pub mod classifier;
pub mod engine;
pub mod registry;
pub mod replacer;
pub mod walker;
pub mod words;

// Re-export main types
pub use calendar::MonthCalendar;
pub use classifier::{Classifier, TokenClass};
pub use engine::{AnonymizationEngine, RunSummary};
pub use registry::{ReplacementKind, ReplacementRegistry};
pub use replacer::{ReplacementStats, WordReplacer};
pub use walker::DocumentWalker;
pub use words::{LoremWordSource, WordSource};
