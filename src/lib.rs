//! # Veil - JSON anonymization
//!
//! Veil replaces natural-language words in JSON documents with synthetic
//! stand-ins while preserving document structure, numbers, URLs, blanks,
//! and date semantics. It is meant for sharing sample payloads (bug
//! reports, demos) without leaking real names, places, or other free
//! text.
//!
//! ## Overview
//!
//! A run tokenizes every string leaf on spaces and classifies each token:
//!
//! - **URLs**, **numbers**, **percentages**, **blanks**, and **`N/A`** pass
//!   through unchanged
//! - **Month names** are replaced with a random month, consistently per run
//! - every other word gets a capitalized pseudonym, consistently per run
//!
//! Structure is preserved exactly: same key set and order, same array
//! lengths, keys never rewritten. Replacement mappings live only for the
//! duration of one run and are never persisted.
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`anonymization`] - Core engine (classifier, registry, walker)
//! - [`domain`] - Error types and result alias
//! - [`logging`] - Structured logging setup
//!
//! ## Quick Start
//!
//! ```
//! use veil::anonymization::AnonymizationEngine;
//!
//! # fn main() -> veil::domain::Result<()> {
//! let engine = AnonymizationEngine::new();
//! let output = engine.anonymize(
//!     r#"{"month": "January", "count": 5, "site": "https://example.com"}"#,
//! )?;
//! // count and site survive unchanged; the month becomes a random month
//! assert!(output.contains("\"count\": 5"));
//! assert!(output.contains("https://example.com"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`] with [`domain::VeilError`]:
//! empty input and malformed JSON surface as single human-readable
//! messages, with no partial output.
//!
//! ## Logging
//!
//! Veil logs through the `tracing` crate; diagnostics go to stderr so the
//! anonymized document on stdout stays clean.

pub mod anonymization;
pub mod cli;
pub mod domain;
pub mod logging;
