//! Related-word listing command
//!
//! Collects every relation of a single word, sorted for stable display.

use crate::core::Term;
use crate::lexicon::Lexicon;
use rustc_hash::FxHashSet;

/// Relations of one word, sorted alphabetically
pub struct RelatedResult {
    /// The queried word, normalized
    pub word: String,
    pub homographs: Vec<String>,
    pub homophones: Vec<String>,
    pub all: Vec<String>,
}

/// List every relation of a word
///
/// Total: an unknown word yields three empty lists.
#[must_use]
pub fn related_words(lexicon: &Lexicon, word: &str) -> RelatedResult {
    let matches = lexicon.all_homonyms(word);

    RelatedResult {
        word: Term::new(word).as_str().to_string(),
        homographs: sorted(&matches.homographs),
        homophones: sorted(&matches.homophones),
        all: sorted(&matches.all),
    }
}

fn sorted(terms: &FxHashSet<Term>) -> Vec<String> {
    let mut words: Vec<String> = terms.iter().map(|t| t.as_str().to_string()).collect();
    words.sort_unstable();
    words
}
