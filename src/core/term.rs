//! Normalized word representation
//!
//! A Term stores a word in its normalized form: lowercased with leading and
//! trailing whitespace stripped. Every stored word and every lookup key goes
//! through this type, so two spellings compare equal exactly when their
//! normalized forms match.

use std::fmt;

/// A word normalized for relation lookups
///
/// Normalization is lowercasing plus trimming leading/trailing whitespace,
/// and nothing else: interior whitespace, punctuation, and accents are kept
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Term(String);

impl Term {
    /// Create a Term by normalizing the input
    ///
    /// Total: any string input yields a Term. An input that is empty after
    /// trimming produces an empty Term, which simply never matches an index
    /// entry.
    ///
    /// # Examples
    /// ```
    /// use homonyms::core::Term;
    ///
    /// assert_eq!(Term::new("  Bank "), Term::new("bank"));
    /// assert_eq!(Term::new("They're").as_str(), "they're");
    /// ```
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// Get the normalized word as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Term {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
