//! Homonym Lookup
//!
//! A lexical-relation lookup library for English words: homographs (same
//! spelling, distinct meanings), homophones (same pronunciation, possibly
//! different spelling), and homonyms (either relation).
//!
//! # Quick Start
//!
//! ```rust
//! use homonyms::lexicon::Lexicon;
//!
//! let lexicon = Lexicon::embedded();
//!
//! assert!(lexicon.are_homographs("lead", "lead"));
//! assert!(lexicon.are_homophones("to", "too"));
//! assert!(lexicon.are_homonyms("Bank ", "bank"));
//!
//! let matches = lexicon.all_homonyms("read");
//! println!("{} related words", matches.all.len());
//! ```
//!
//! The lexicon is immutable after construction and safe to share across
//! threads. Custom datasets can be injected through [`lexicon::Lexicon::new`]
//! or loaded from files with [`wordlists::loader::load_groups_from_file`].

// Core domain types
pub mod core;

// Relation indexes and queries
pub mod lexicon;

// Word group data
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
