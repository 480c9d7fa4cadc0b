//! Console output
//!
//! Progress messages for each wordlist read and each output written, the
//! per-file spinner, and the `--stats` run summary.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::Cell;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::dedup::DedupStats;

/// Console that goes silent in quiet mode
#[derive(Debug, Clone, Copy)]
pub struct Console {
    quiet: bool,
}

impl Console {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn banner(&self) {
        if self.quiet {
            return;
        }
        println!("{}", "┌─────────────────────────────────────────────┐".green());
        println!("{}", "│  wordlist-dedupe · dedupe | combine lists   │".green().bold());
        println!("{}", "└─────────────────────────────────────────────┘".green());
    }

    /// Start of a mode or section
    pub fn section(&self, text: &str) {
        if !self.quiet {
            println!("\n{} {}", "»".green(), text.bold());
        }
    }

    pub fn note(&self, text: &str) {
        if !self.quiet {
            println!("  {} {}", "·".cyan(), text);
        }
    }

    pub fn done(&self, text: &str) {
        if !self.quiet {
            println!("  {} {}", "✔".green(), text.green());
        }
    }

    pub fn warn(&self, text: &str) {
        if !self.quiet {
            println!("  {} {}", "!".yellow().bold(), text.yellow());
        }
    }

    /// Spinner shown while wordlists are read; hidden in quiet mode
    pub fn spinner(&self) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }
}

/// Errors are always shown, quiet or not
pub fn print_error(text: &str) {
    eprintln!("{} {}", "error:".red().bold(), text.red());
}

/// Counters for one run
#[derive(Debug)]
pub struct ProcessingStats {
    files_read: Cell<u64>,
    bytes_read: Cell<u64>,
    lines: Cell<DedupStats>,
    files_written: Cell<u64>,
    started: Instant,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            files_read: Cell::new(0),
            bytes_read: Cell::new(0),
            lines: Cell::new(DedupStats::default()),
            files_written: Cell::new(0),
            started: Instant::now(),
        }
    }

    pub fn add_file(&self, size: u64) {
        self.files_read.set(self.files_read.get() + 1);
        self.bytes_read.set(self.bytes_read.get() + size);
    }

    /// Fold in the counters of one finished set
    pub fn add_dedup(&self, stats: DedupStats) {
        let mut total = self.lines.get();
        total.total_processed += stats.total_processed;
        total.unique_count += stats.unique_count;
        total.duplicate_count += stats.duplicate_count;
        self.lines.set(total);
    }

    pub fn add_output(&self) {
        self.files_written.set(self.files_written.get() + 1);
    }

    pub fn files_read(&self) -> u64 {
        self.files_read.get()
    }

    pub fn files_written(&self) -> u64 {
        self.files_written.get()
    }

    pub fn lines(&self) -> DedupStats {
        self.lines.get()
    }

    /// Label/value rows of the summary, in display order
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        let lines = self.lines();
        vec![
            ("wordlists read", self.files_read().to_string()),
            ("bytes read", ByteSize(self.bytes_read.get()).to_string()),
            ("lines read", lines.total_processed.to_string()),
            ("duplicates", lines.duplicate_count.to_string()),
            ("unique lines", lines.unique_count.to_string()),
            ("files written", self.files_written().to_string()),
            ("elapsed", format!("{:.2?}", self.started.elapsed())),
        ]
    }

    pub fn print_summary(&self, output_dir: &Path) {
        println!("\n{} {}", "»".green(), format!("Summary for {:?}", output_dir).bold());
        for (label, value) in self.summary_rows() {
            println!("  {:>14}  {}", label.dimmed(), value);
        }
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
