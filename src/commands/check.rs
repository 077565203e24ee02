//! Pair checking command
//!
//! Evaluates all three relation predicates for a pair of words.

use crate::core::Term;
use crate::lexicon::Lexicon;

/// Result of checking a word pair
pub struct CheckResult {
    /// First word, normalized
    pub word1: String,
    /// Second word, normalized
    pub word2: String,
    pub homographs: bool,
    pub homophones: bool,
    pub homonyms: bool,
}

/// Check every relation between two words
///
/// Total: unknown words simply yield three `false` verdicts.
#[must_use]
pub fn check_words(lexicon: &Lexicon, word1: &str, word2: &str) -> CheckResult {
    CheckResult {
        word1: Term::new(word1).as_str().to_string(),
        word2: Term::new(word2).as_str().to_string(),
        homographs: lexicon.are_homographs(word1, word2),
        homophones: lexicon.are_homophones(word1, word2),
        homonyms: lexicon.are_homonyms(word1, word2),
    }
}
