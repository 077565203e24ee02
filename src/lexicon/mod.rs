//! Relation indexes and the query engine
//!
//! Builds reverse indexes from equivalence groups and answers homograph,
//! homophone, and homonym queries over them.

mod engine;
mod index;

pub use engine::{HomonymMatches, Lexicon, Statistics};
pub use index::{ReverseIndex, build_reverse_index};
