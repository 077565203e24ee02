//! Word groups for homonym lookup
//!
//! Provides embedded equivalence groups compiled into the binary and a
//! loader for the same format from external files.

mod embedded;
pub mod loader;

pub use embedded::{
    HOMOGRAPH_GROUPS, HOMOGRAPH_GROUPS_COUNT, HOMOPHONE_GROUPS, HOMOPHONE_GROUPS_COUNT,
};
