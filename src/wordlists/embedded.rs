//! Embedded word groups
//!
//! Equivalence groups compiled into the binary at build time.

// Include generated group lists from build script
include!(concat!(env!("OUT_DIR"), "/homographs.rs"));
include!(concat!(env!("OUT_DIR"), "/homophones.rs"));
