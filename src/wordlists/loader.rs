//! Group loading utilities
//!
//! Provides functions to load equivalence groups from files or use the
//! embedded constants. The file format is one group per line, members
//! separated by commas; blank lines and lines starting with '#' are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Load equivalence groups from a file
///
/// Words keep their raw case and spacing here; normalization happens when
/// the reverse index is built. Lines that contain no words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use homonyms::wordlists::loader::load_groups_from_file;
///
/// let groups = load_groups_from_file("data/homophones.txt").unwrap();
/// println!("Loaded {} groups", groups.len());
/// ```
pub fn load_groups_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Vec<String>>> {
    let content = fs::read_to_string(path)?;

    let groups = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let group: Vec<String> = line
                .split(',')
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .map(String::from)
                .collect();
            if group.is_empty() { None } else { Some(group) }
        })
        .collect();

    Ok(groups)
}

/// Convert embedded group slices to owned groups
///
/// # Examples
/// ```
/// use homonyms::wordlists::loader::groups_from_slice;
/// use homonyms::wordlists::HOMOPHONE_GROUPS;
///
/// let groups = groups_from_slice(HOMOPHONE_GROUPS);
/// assert_eq!(groups.len(), HOMOPHONE_GROUPS.len());
/// ```
#[must_use]
pub fn groups_from_slice(slice: &[&[&str]]) -> Vec<Vec<String>> {
    slice
        .iter()
        .map(|group| group.iter().map(|&word| word.to_string()).collect())
        .collect()
}
