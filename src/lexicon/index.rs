//! Reverse index construction
//!
//! An equivalence group is a set of words mutually related under one relation
//! type. The reverse index turns a sequence of groups into a map from each
//! normalized word to the set of normalized words it relates to.

use crate::core::Term;
use rustc_hash::{FxHashMap, FxHashSet};

/// Mapping from a normalized word to the set of words related to it
pub type ReverseIndex = FxHashMap<Term, FxHashSet<Term>>;

/// Build a reverse index from equivalence groups
///
/// Every word in a group accumulates every other word in that group; with
/// `keep_self` the word is also kept in its own entry. A word appearing in
/// several groups maps to the union of all those groups' members. Duplicate
/// spellings within a group collapse to a single entry, and words appearing
/// in no group are absent from the result.
///
/// # Examples
/// ```
/// use homonyms::lexicon::build_reverse_index;
/// use homonyms::core::Term;
///
/// let groups = vec![vec!["to".to_string(), "too".to_string(), "two".to_string()]];
/// let index = build_reverse_index(&groups, true);
///
/// let entry = &index[&Term::new("to")];
/// assert!(entry.contains(&Term::new("to")));
/// assert!(entry.contains(&Term::new("too")));
/// assert!(entry.contains(&Term::new("two")));
/// ```
#[must_use]
pub fn build_reverse_index(groups: &[Vec<String>], keep_self: bool) -> ReverseIndex {
    let mut index = ReverseIndex::default();

    for group in groups {
        // Duplicates in the raw group collapse here
        let members: FxHashSet<Term> = group.iter().map(|word| Term::new(word)).collect();

        for word in &members {
            let entry = index.entry(word.clone()).or_default();
            for other in &members {
                if keep_self || other != word {
                    entry.insert(other.clone());
                }
            }
        }
    }

    index
}
