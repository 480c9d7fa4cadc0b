//! Command-line interface definition for wordlist-dedupe
//!
//! Provides argument parsing for the two operating modes.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Wordlist deduplication tool
///
/// Removes duplicate lines from wordlists, either one file at a time or
/// merged across a whole directory of wordlists.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wordlist-dedupe",
    author = "m0h1nd4",
    version,
    about = "Deduplicate wordlists, or combine a directory of them into one unique list",
    long_about = r#"
╔══════════════════════════════════════════════════════════════════════════════╗
║                          WORDLIST-DEDUPE v1.0.0                              ║
║                   Wordlist Deduplication and Merging                         ║
╚══════════════════════════════════════════════════════════════════════════════╝

Takes a wordlist file, or a directory of wordlist files (*.txt), and writes
deduplicated copies to an output directory (default: ./output).

Input is read as raw bytes, so wordlists with mixed or broken encodings are
handled without errors. Each line is trimmed and a leading "N " line-number
prefix (single digit plus space) is removed before deduplication.

EXAMPLES:
    # Deduplicate a single wordlist into ./output/rockyou.txt
    wordlist-dedupe dedupe rockyou.txt

    # Deduplicate every wordlist in a directory, one output per input
    wordlist-dedupe dedupe /wordlists/ -o /tmp/clean

    # Merge every wordlist in a directory into ./output/combined_wordlist.txt
    wordlist-dedupe combine /wordlists/

    # Sorted output with a statistics summary
    wordlist-dedupe combine /wordlists/ --sort --stats
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/wordlist-dedupe"
)]
pub struct Args {
    /// Operating mode
    #[arg(value_enum)]
    pub mode: Mode,

    /// Input file or directory path
    #[arg(value_name = "INPUT_PATH")]
    pub input_path: PathBuf,

    /// Output directory (default: ./output)
    #[arg(
        short,
        long = "output_path",
        visible_alias = "output-path",
        value_name = "OUTPUT"
    )]
    pub output_path: Option<PathBuf>,

    /// Line normalization strategy
    #[arg(long, value_enum, default_value_t = Normalization::Lossy)]
    pub normalization: Normalization,

    /// Sort output alphabetically
    #[arg(long, default_value_t = false)]
    pub sort: bool,

    /// Show detailed statistics
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// What to do with the input wordlists
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Remove duplicates from each wordlist independently
    Dedupe,
    /// Merge all wordlists of a directory into combined_wordlist.txt
    Combine,
}

/// How raw lines are turned into text before deduplication
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Normalization {
    /// Permissive decode of each line (invalid bytes never fail)
    #[default]
    Lossy,
    /// Bug-compatible byte-literal rendering of the original script
    Legacy,
}

impl Args {
    /// Get output directory, defaulting to `output` under the current directory
    pub fn get_output_dir(&self) -> anyhow::Result<PathBuf> {
        match self.output_path {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(std::env::current_dir()?.join("output")),
        }
    }
}
