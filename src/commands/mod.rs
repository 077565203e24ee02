//! Command implementations

pub mod check;
pub mod related;

pub use check::{CheckResult, check_words};
pub use related::{RelatedResult, related_words};
