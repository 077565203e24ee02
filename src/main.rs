//! Homonym Lookup - CLI
//!
//! Thin wrapper over the lookup library: check word pairs, list relations,
//! and show dataset statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use homonyms::{
    commands::{check_words, related_words},
    lexicon::Lexicon,
    output::{print_check_result, print_related_result, print_statistics},
    wordlists::loader::{groups_from_slice, load_groups_from_file},
    wordlists::{HOMOGRAPH_GROUPS, HOMOPHONE_GROUPS},
};

#[derive(Parser)]
#[command(
    name = "homonyms",
    about = "English homonym lookup over embedded homograph and homophone groups",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a custom homograph group file (default: embedded data)
    #[arg(long, global = true)]
    homographs: Option<String>,

    /// Path to a custom homophone group file (default: embedded data)
    #[arg(long, global = true)]
    homophones: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether two words are homographs, homophones, or homonyms
    Check {
        /// First word
        word1: String,

        /// Second word
        word2: String,
    },

    /// List every known relation of a word
    Related {
        /// Word to look up
        word: String,
    },

    /// Show dataset statistics
    Stats,
}

/// Build the lexicon, honoring file overrides for either group collection
fn load_lexicon(homographs: Option<&str>, homophones: Option<&str>) -> Result<Lexicon> {
    let homograph_groups = match homographs {
        Some(path) => load_groups_from_file(path)?,
        None => groups_from_slice(HOMOGRAPH_GROUPS),
    };
    let homophone_groups = match homophones {
        Some(path) => load_groups_from_file(path)?,
        None => groups_from_slice(HOMOPHONE_GROUPS),
    };

    Ok(Lexicon::new(&homograph_groups, &homophone_groups))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let lexicon = load_lexicon(cli.homographs.as_deref(), cli.homophones.as_deref())?;

    match cli.command {
        Commands::Check { word1, word2 } => {
            let result = check_words(&lexicon, &word1, &word2);
            print_check_result(&result);
        }
        Commands::Related { word } => {
            let result = related_words(&lexicon, &word);
            print_related_result(&result);
        }
        Commands::Stats => {
            print_statistics(&lexicon.statistics());
        }
    }

    Ok(())
}
