//! Display functions for command results

use crate::commands::{CheckResult, RelatedResult};
use crate::lexicon::Statistics;
use colored::Colorize;

/// Print the result of checking a word pair
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {} / {}",
        result.word1.bright_yellow().bold(),
        result.word2.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_verdict("Homographs", result.homographs);
    print_verdict("Homophones", result.homophones);
    print_verdict("Homonyms", result.homonyms);
}

fn print_verdict(relation: &str, holds: bool) {
    let mark = if holds {
        "yes".green().bold()
    } else {
        "no".red()
    };
    println!("  {relation:<12} {mark}");
}

/// Print every relation of a word
pub fn print_related_result(result: &RelatedResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Relations of: {}", result.word.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    print_word_list("Homographs", &result.homographs);
    print_word_list("Homophones", &result.homophones);
    print_word_list("All", &result.all);
}

fn print_word_list(label: &str, words: &[String]) {
    if words.is_empty() {
        println!("  {label:<12} {}", "(none)".dimmed());
    } else {
        println!("  {label:<12} {}", words.join(", "));
    }
}

/// Print dataset statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DATASET STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Homograph groups: {}", stats.homograph_groups);
    println!("  Homograph words:  {}", stats.homograph_words);
    println!("  Homophone groups: {}", stats.homophone_groups);
    println!("  Homophone words:  {}", stats.homophone_words);
}
