//! Homonym query engine
//!
//! A Lexicon is built once from two collections of equivalence groups and is
//! read-only afterwards, so it can be shared freely across threads.

use super::index::{ReverseIndex, build_reverse_index};
use crate::core::Term;
use rustc_hash::FxHashSet;

/// Read-only lookup over homograph and homophone relations
///
/// Both reverse indexes are built with self-inclusion: a known word always
/// relates to itself along with the rest of its group(s). Inputs to every
/// query are normalized (lowercased, trimmed) before lookup.
pub struct Lexicon {
    homograph_group_count: usize,
    homophone_group_count: usize,
    homographs: ReverseIndex,
    homophones: ReverseIndex,
}

/// Relations of one word, split by kind
///
/// `all` is always the union of `homographs` and `homophones`.
pub struct HomonymMatches {
    pub homographs: FxHashSet<Term>,
    pub homophones: FxHashSet<Term>,
    pub all: FxHashSet<Term>,
}

/// Dataset counts for a Lexicon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Number of homograph equivalence groups loaded
    pub homograph_groups: usize,
    /// Number of homophone equivalence groups loaded
    pub homophone_groups: usize,
    /// Distinct words in the homograph reverse index
    pub homograph_words: usize,
    /// Distinct words in the homophone reverse index
    pub homophone_words: usize,
}

impl Lexicon {
    /// Build a lexicon from equivalence groups
    ///
    /// Each group is a list of raw-case words related under that relation.
    /// Duplicate spellings within a group collapse to one stored word.
    ///
    /// # Examples
    /// ```
    /// use homonyms::lexicon::Lexicon;
    ///
    /// let homographs = vec![vec!["lead".to_string(), "lead".to_string()]];
    /// let homophones = vec![vec!["to".to_string(), "too".to_string(), "two".to_string()]];
    /// let lexicon = Lexicon::new(&homographs, &homophones);
    ///
    /// assert!(lexicon.are_homographs("lead", "lead"));
    /// assert!(lexicon.are_homophones("to", "too"));
    /// ```
    #[must_use]
    pub fn new(homograph_groups: &[Vec<String>], homophone_groups: &[Vec<String>]) -> Self {
        Self {
            homograph_group_count: homograph_groups.len(),
            homophone_group_count: homophone_groups.len(),
            homographs: build_reverse_index(homograph_groups, true),
            homophones: build_reverse_index(homophone_groups, true),
        }
    }

    /// Build a lexicon from the embedded word groups
    #[must_use]
    pub fn embedded() -> Self {
        use crate::wordlists::loader::groups_from_slice;
        use crate::wordlists::{HOMOGRAPH_GROUPS, HOMOPHONE_GROUPS};

        Self::new(
            &groups_from_slice(HOMOGRAPH_GROUPS),
            &groups_from_slice(HOMOPHONE_GROUPS),
        )
    }

    /// Check whether two inputs are homographs
    ///
    /// Homographs are defined on a single spelling carrying multiple senses,
    /// so this is true only when both inputs normalize to the same word and
    /// that word is known to the homograph index.
    #[must_use]
    pub fn are_homographs(&self, word1: &str, word2: &str) -> bool {
        let (word1, word2) = (Term::new(word1), Term::new(word2));
        word1 == word2 && self.homographs.contains_key(&word1)
    }

    /// Check whether two inputs are homophones
    ///
    /// True when the second word is in the homophone entry of the first.
    /// Self-inclusion makes `are_homophones(x, x)` true for every word the
    /// homophone index knows, a deliberate policy choice over treating a
    /// word as never being its own homophone.
    #[must_use]
    pub fn are_homophones(&self, word1: &str, word2: &str) -> bool {
        let (word1, word2) = (Term::new(word1), Term::new(word2));
        self.homophones
            .get(&word1)
            .is_some_and(|related| related.contains(&word2))
    }

    /// Check whether two inputs are homonyms (homographs or homophones)
    #[must_use]
    pub fn are_homonyms(&self, word1: &str, word2: &str) -> bool {
        self.are_homographs(word1, word2) || self.are_homophones(word1, word2)
    }

    /// Get all homographs of a word, empty when the word is unknown
    #[must_use]
    pub fn homographs_of(&self, word: &str) -> FxHashSet<Term> {
        self.homographs
            .get(&Term::new(word))
            .cloned()
            .unwrap_or_default()
    }

    /// Get all homophones of a word, empty when the word is unknown
    #[must_use]
    pub fn homophones_of(&self, word: &str) -> FxHashSet<Term> {
        self.homophones
            .get(&Term::new(word))
            .cloned()
            .unwrap_or_default()
    }

    /// Get every relation of a word, split by kind plus their union
    ///
    /// Total: unknown words yield three empty sets.
    #[must_use]
    pub fn all_homonyms(&self, word: &str) -> HomonymMatches {
        let homographs = self.homographs_of(word);
        let homophones = self.homophones_of(word);
        let all = homographs.union(&homophones).cloned().collect();

        HomonymMatches {
            homographs,
            homophones,
            all,
        }
    }

    /// Get group and distinct-word counts for the loaded dataset
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics {
            homograph_groups: self.homograph_group_count,
            homophone_groups: self.homophone_group_count,
            homograph_words: self.homographs.len(),
            homophone_words: self.homophones.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(words: &[&str]) -> Vec<String> {
        words.iter().map(|&w| w.to_string()).collect()
    }

    fn fixture() -> Lexicon {
        let homographs = vec![
            group(&["lead", "lead"]),
            group(&["bank", "bank", "bank"]),
            group(&["present", "present", "present"]),
        ];
        let homophones = vec![
            group(&["to", "too", "two"]),
            group(&["bank", "bank"]),
            group(&["read", "reed"]),
            group(&["red", "read"]),
        ];
        Lexicon::new(&homographs, &homophones)
    }

    #[test]
    fn homographs_require_identical_spelling() {
        let lexicon = fixture();

        assert!(lexicon.are_homographs("lead", "lead"));
        assert!(!lexicon.are_homographs("lead", "bank"));
        assert!(!lexicon.are_homographs("to", "too"));
    }

    #[test]
    fn homographs_require_known_word() {
        let lexicon = fixture();

        // Equal spellings alone are not enough
        assert!(!lexicon.are_homographs("table", "table"));
        assert!(!lexicon.are_homographs("xyzzy", "xyzzy"));
    }

    #[test]
    fn homophones_within_group() {
        let lexicon = fixture();

        assert!(lexicon.are_homophones("to", "too"));
        assert!(lexicon.are_homophones("to", "two"));
        assert!(!lexicon.are_homophones("to", "bank"));
    }

    #[test]
    fn homophones_symmetric() {
        let lexicon = fixture();

        assert_eq!(
            lexicon.are_homophones("to", "too"),
            lexicon.are_homophones("too", "to")
        );
        assert_eq!(
            lexicon.are_homophones("read", "red"),
            lexicon.are_homophones("red", "read")
        );
    }

    #[test]
    fn self_homophone_for_indexed_word() {
        let lexicon = fixture();

        // Self-inclusion policy: an indexed word is its own homophone
        assert!(lexicon.are_homophones("bank", "bank"));
        assert!(lexicon.are_homophones("to", "to"));
        assert!(!lexicon.are_homophones("lead", "lead"));
    }

    #[test]
    fn homonyms_is_either_relation() {
        let lexicon = fixture();

        assert!(lexicon.are_homonyms("lead", "lead")); // homograph only
        assert!(lexicon.are_homonyms("to", "too")); // homophone only
        assert!(lexicon.are_homonyms("bank", "bank")); // both
        assert!(!lexicon.are_homonyms("to", "lead"));
        assert!(!lexicon.are_homonyms("xyzzy", "xyzzy"));
    }

    #[test]
    fn queries_normalize_inputs() {
        let lexicon = fixture();

        assert!(lexicon.are_homographs("Lead ", " LEAD"));
        assert!(lexicon.are_homophones(" TO", "Too "));
        assert_eq!(
            lexicon.are_homonyms("Bank ", "bank"),
            lexicon.are_homonyms("bank", "bank")
        );
    }

    #[test]
    fn homographs_of_known_word() {
        let lexicon = fixture();

        let related = lexicon.homographs_of("present");
        assert_eq!(related.len(), 1);
        assert!(related.contains(&Term::new("present")));
    }

    #[test]
    fn homophones_of_union_across_groups() {
        let lexicon = fixture();

        let related = lexicon.homophones_of("read");
        assert_eq!(related.len(), 3);
        assert!(related.contains(&Term::new("read")));
        assert!(related.contains(&Term::new("reed")));
        assert!(related.contains(&Term::new("red")));
    }

    #[test]
    fn retrievals_empty_for_unknown_word() {
        let lexicon = fixture();

        assert!(lexicon.homographs_of("xyzzy").is_empty());
        assert!(lexicon.homophones_of("xyzzy").is_empty());
    }

    #[test]
    fn all_homonyms_is_union() {
        let lexicon = fixture();

        let matches = lexicon.all_homonyms("bank");
        let expected: FxHashSet<Term> = matches
            .homographs
            .union(&matches.homophones)
            .cloned()
            .collect();
        assert_eq!(matches.all, expected);
        assert!(matches.all.contains(&Term::new("bank")));
    }

    #[test]
    fn all_homonyms_unknown_word() {
        let lexicon = fixture();

        let matches = lexicon.all_homonyms("xyzzy");
        assert!(matches.homographs.is_empty());
        assert!(matches.homophones.is_empty());
        assert!(matches.all.is_empty());
    }

    #[test]
    fn statistics_counts() {
        let lexicon = fixture();

        let stats = lexicon.statistics();
        assert_eq!(stats.homograph_groups, 3);
        assert_eq!(stats.homophone_groups, 4);
        assert_eq!(stats.homograph_words, 3);
        // to, too, two, bank, read, reed, red
        assert_eq!(stats.homophone_words, 7);
    }

    #[test]
    fn embedded_lexicon_spot_checks() {
        let lexicon = Lexicon::embedded();

        assert!(lexicon.are_homographs("lead", "lead"));
        assert!(lexicon.are_homophones("to", "too"));
        assert!(lexicon.are_homophones("too", "to"));
        assert!(lexicon.are_homophones("bank", "bank"));
        assert!(!lexicon.are_homophones("cat", "dog"));
        assert!(!lexicon.are_homonyms("xyzzy", "xyzzy"));
    }

    #[test]
    fn embedded_statistics_match_group_consts() {
        use crate::wordlists::{HOMOGRAPH_GROUPS_COUNT, HOMOPHONE_GROUPS_COUNT};

        let stats = Lexicon::embedded().statistics();
        assert_eq!(stats.homograph_groups, HOMOGRAPH_GROUPS_COUNT);
        assert_eq!(stats.homophone_groups, HOMOPHONE_GROUPS_COUNT);
    }
}
