//! Build script to generate embedded word groups
//!
//! Reads group data files and generates Rust source code with const arrays.
//! Each input line is one equivalence group: words separated by commas.
//! Blank lines and lines starting with '#' are skipped.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Generate homograph groups (same spelling repeated once per sense)
    generate_group_list(
        "data/homographs.txt",
        &Path::new(&out_dir).join("homographs.rs"),
        "HOMOGRAPH_GROUPS",
        "Homograph equivalence groups (one spelling per group, repeated per sense)",
    );

    // Generate homophone groups (sound-alike spellings)
    generate_group_list(
        "data/homophones.txt",
        &Path::new(&out_dir).join("homophones.rs"),
        "HOMOPHONE_GROUPS",
        "Homophone equivalence groups (spellings sharing a pronunciation)",
    );

    // Rebuild if group data changes
    println!("cargo:rerun-if-changed=data/homographs.txt");
    println!("cargo:rerun-if-changed=data/homophones.txt");
}

fn generate_group_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let groups: Vec<Vec<&str>> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split(',')
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .collect()
        })
        .collect();
    let count = groups.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word groups").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&[&str]] = &[").unwrap();

    for group in groups {
        let members: Vec<String> = group.iter().map(|word| format!("\"{word}\"")).collect();
        writeln!(output, "    &[{}],", members.join(", ")).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of groups in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
