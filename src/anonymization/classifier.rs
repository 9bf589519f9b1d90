//! Token classification
//!
//! Assigns every whitespace-delimited token to exactly one replacement
//! class. Classification is a pure function of the token text; the
//! precedence order below is load-bearing and must not be reordered.

use crate::anonymization::calendar::MonthCalendar;
use crate::domain::{Result, VeilError};
use regex::Regex;

/// Replacement class for a single token
///
/// First match wins, in this order: URL, Numeric, Blank, Month, Generic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Absolute http(s) URI, preserved verbatim
    Url,
    /// Number, number-prefixed token, or percentage, preserved verbatim
    Numeric,
    /// Empty/whitespace-only token or `N/A`, preserved verbatim
    Blank,
    /// Recognized month representation, replaced with a random month name
    Month,
    /// Ordinary word, replaced with a pseudonym
    Generic,
}

/// Classifies tokens into replacement classes
///
/// Patterns are compiled once at construction and reused for every token.
pub struct Classifier {
    url: Regex,
    percentage: Regex,
    float_prefix: Regex,
    calendar: MonthCalendar,
}

impl Classifier {
    /// Create a classifier with compiled patterns
    ///
    /// # Errors
    ///
    /// Returns [`VeilError::Configuration`] if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            url: compile(r"^https?://\S+$")?,
            percentage: compile(r"^\d+%$")?,
            // Leading float per parseFloat semantics: sign, digits with an
            // optional fraction (or bare fraction), optional exponent. A
            // prefix match is enough; "12abc" counts as numeric.
            float_prefix: compile(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?")?,
            calendar: MonthCalendar::new(),
        })
    }

    /// Classify one token
    pub fn classify(&self, token: &str) -> TokenClass {
        if self.url.is_match(token) {
            TokenClass::Url
        } else if self.float_prefix.is_match(token) || self.percentage.is_match(token) {
            TokenClass::Numeric
        } else if token.trim().is_empty() || token.eq_ignore_ascii_case("N/A") {
            TokenClass::Blank
        } else if self.calendar.is_month(token) {
            TokenClass::Month
        } else {
            TokenClass::Generic
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| VeilError::Configuration(format!("Invalid token pattern {pattern}: {e}")))
}
