//! Word-generation capability
//!
//! The registry needs a source of pronounceable stand-in words. Modeling
//! that as a trait keeps the source injectable, so tests can substitute a
//! deterministic sequence and the default can be swapped for a real
//! external service later without touching the registry.

use fake::faker::lorem::en::Word;
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Source of pronounceable replacement words
///
/// Implementations must return one lowercase word per call. Draws are
/// independent; the registry handles consistency for repeated originals.
pub trait WordSource: Send {
    /// Produce the next replacement word
    fn next_word(&mut self) -> String;
}

/// Default word source backed by the `fake` crate's lorem word list
pub struct LoremWordSource {
    rng: StdRng,
}

impl LoremWordSource {
    /// Create a source seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a deterministic source from a seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl WordSource for LoremWordSource {
    fn next_word(&mut self) -> String {
        Word().fake_with_rng(&mut self.rng)
    }
}

impl Default for LoremWordSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_are_lowercase_and_nonempty() {
        let mut source = LoremWordSource::new();
        for _ in 0..50 {
            let word = source.next_word();
            assert!(!word.is_empty());
            assert_eq!(word, word.to_lowercase());
        }
    }

    #[test]
    fn test_seeded_source_is_deterministic() {
        let mut a = LoremWordSource::with_seed(42);
        let mut b = LoremWordSource::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }
}
