//! # Wordlist Dedupe
//!
//! Removes duplicate entries from wordlists.
//!
//! ## Features
//!
//! - **Dedupe mode**: deduplicate each wordlist on its own, keeping its file name
//! - **Combine mode**: merge a directory of wordlists into one unique list
//! - **Binary-safe input**: arbitrary bytes never abort a run; lines are decoded permissively
//! - **Normalization**: whitespace trimming and removal of `N ` line-number prefixes
//!
//! ## Usage
//!
//! ```bash
//! # Deduplicate a single wordlist into ./output/rockyou.txt
//! wordlist-dedupe dedupe rockyou.txt
//!
//! # Merge a directory of wordlists into ./output/combined_wordlist.txt
//! wordlist-dedupe combine /wordlists/ -o /tmp/out
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use wordlist_dedupe::cli::{Mode, Normalization};
//! use wordlist_dedupe::processor::{Processor, ProcessorConfig};
//! use std::path::PathBuf;
//!
//! let config = ProcessorConfig {
//!     mode: Mode::Combine,
//!     output_dir: PathBuf::from("./output"),
//!     normalization: Normalization::Lossy,
//!     sort_output: false,
//!     quiet: false,
//!     show_stats: true,
//! };
//!
//! let processor = Processor::new(config).unwrap();
//! // processor.process(std::path::Path::new("/wordlists")).unwrap();
//! ```

pub mod cli;
pub mod dedup;
pub mod encoding;
pub mod error;
pub mod input;
pub mod normalize;
pub mod output;
pub mod processor;
pub mod progress;

pub use cli::Args;
pub use dedup::{dedupe_path, WordSet};
pub use error::DedupeError;
pub use processor::{Processor, ProcessorConfig};
