//! Fixed month calendar used for classification and replacement draws

use rand::Rng;

/// The twelve canonical month names, in calendar order
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Fixed calendar of the twelve month names
///
/// Answers membership queries for the accepted month representations
/// (full name, 3-letter abbreviation, zero-padded and unpadded numeric)
/// and draws a uniformly random month name for replacement.
///
/// Matching is done against this fixed list rather than a general date
/// parser so that classification stays deterministic and independent of
/// runtime locale. A bare day-of-month number like `"25"` never matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthCalendar;

impl MonthCalendar {
    /// Create a new calendar
    pub fn new() -> Self {
        Self
    }

    /// All twelve month names in calendar order
    pub fn names(&self) -> &'static [&'static str; 12] {
        &MONTH_NAMES
    }

    /// Check whether a token is an accepted month representation
    ///
    /// Accepted forms, all case-insensitive for names:
    /// - full name (`January`)
    /// - 3-letter abbreviation (`Jan`)
    /// - zero-padded 2-digit numeric month (`01`..`12`)
    /// - unpadded numeric month (`1`..`12`)
    pub fn is_month(&self, token: &str) -> bool {
        if MONTH_NAMES.iter().any(|name| token.eq_ignore_ascii_case(name)) {
            return true;
        }

        if token.len() == 3
            && MONTH_NAMES
                .iter()
                .any(|name| token.eq_ignore_ascii_case(&name[..3]))
        {
            return true;
        }

        self.numeric_month(token).is_some()
    }

    /// Parse a 1- or 2-digit numeric month (1..=12), if the token is one
    fn numeric_month(&self, token: &str) -> Option<u8> {
        if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match token.parse::<u8>() {
            Ok(month @ 1..=12) => Some(month),
            _ => None,
        }
    }

    /// Draw a month name uniformly at random
    pub fn random_month<R: Rng>(&self, rng: &mut R) -> &'static str {
        MONTH_NAMES[rng.gen_range(0..MONTH_NAMES.len())]
    }
}
