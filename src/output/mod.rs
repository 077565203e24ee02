//! Terminal output formatting

pub mod display;

pub use display::{print_check_result, print_related_result, print_statistics};
