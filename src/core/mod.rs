//! Core domain types for homonym lookup
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear semantics.

mod term;

pub use term::Term;
