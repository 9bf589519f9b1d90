//! Per-run replacement registry
//!
//! Maps each distinct original token to its chosen replacement so the same
//! word is substituted consistently throughout one document. The registry
//! is created empty for every run and discarded afterwards; mappings are
//! never persisted or shared across runs.

use crate::anonymization::calendar::MonthCalendar;
use crate::anonymization::words::WordSource;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// Which replacement rule applies to a token that needs a pseudonym
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementKind {
    /// Replace with a random month name, stored and returned verbatim
    Month,
    /// Replace with a random word, stored lower-case, returned capitalized
    Generic,
}

/// Per-run store of original token -> chosen replacement
///
/// Invariant: once a key is set it is never overwritten, so two
/// occurrences of the same original token always yield the same
/// replacement within a run. The registry owns its word source and rng;
/// mutation goes through `&mut self`, so a check-then-set is atomic by
/// construction.
pub struct ReplacementRegistry {
    replacements: HashMap<String, String>,
    words: Box<dyn WordSource>,
    rng: StdRng,
    calendar: MonthCalendar,
}

impl ReplacementRegistry {
    /// Create an empty registry for one run
    pub fn new(words: Box<dyn WordSource>, rng: StdRng) -> Self {
        Self {
            replacements: HashMap::new(),
            words,
            rng,
            calendar: MonthCalendar::new(),
        }
    }

    /// Look up or create the replacement for an original token
    ///
    /// On a hit the stored value is returned verbatim for months and
    /// capitalized for generic words. Capitalization happens at lookup
    /// time, not storage time: generic words are stored lower-case and
    /// re-capitalized on every reuse. Month replacements carry no
    /// capitalization step at all. This asymmetry is part of the observable
    /// behavior and must stay as is.
    pub fn get_or_create(&mut self, original: &str, kind: ReplacementKind) -> String {
        if let Some(stored) = self.replacements.get(original) {
            return match kind {
                ReplacementKind::Month => stored.clone(),
                ReplacementKind::Generic => capitalize(stored),
            };
        }

        match kind {
            ReplacementKind::Month => {
                let month = self.calendar.random_month(&mut self.rng).to_string();
                self.replacements.insert(original.to_string(), month.clone());
                month
            }
            ReplacementKind::Generic => {
                let word = self.words.next_word().to_lowercase();
                let replacement = capitalize(&word);
                self.replacements.insert(original.to_string(), word);
                replacement
            }
        }
    }

    /// Number of distinct originals replaced so far in this run
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Check whether any replacement has been made yet
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }
}

/// Uppercase the first character, leaving the rest untouched
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
