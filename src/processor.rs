//! Core processing engine
//!
//! Drives the two modes: `dedupe` writes one output per input wordlist,
//! `combine` merges every wordlist of a directory into a single output.

use crate::cli::{Args, Mode, Normalization};
use crate::dedup::{dedupe_path_with, WordSet};
use crate::error::DedupeError;
use crate::input::collect_wordlists;
use crate::normalize::Normalizer;
use crate::output::{ensure_output_dir, write_wordlist, WriteSummary, COMBINED_OUTPUT_NAME};
use crate::progress::{Console, ProcessingStats};

use bytesize::ByteSize;
use std::fs;
use std::path::{Path, PathBuf};

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub mode: Mode,
    pub output_dir: PathBuf,
    pub normalization: Normalization,
    pub sort_output: bool,
    pub quiet: bool,
    pub show_stats: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        Ok(Self {
            mode: args.mode,
            output_dir: args.get_output_dir()?,
            normalization: args.normalization,
            sort_output: args.sort,
            quiet: args.quiet,
            show_stats: args.stats,
        })
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
    normalizer: Normalizer,
    console: Console,
    stats: ProcessingStats,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> anyhow::Result<Self> {
        let normalizer = Normalizer::new(config.normalization)?;
        Ok(Self {
            console: Console::new(config.quiet),
            config,
            normalizer,
            stats: ProcessingStats::new(),
        })
    }

    /// Process input (file or directory) and return the files written
    pub fn process(&self, input: &Path) -> anyhow::Result<Vec<WriteSummary>> {
        // Nothing is created before the input is known to be usable
        self.validate(input)?;
        self.prepare_output_dir()?;

        let written = match self.config.mode {
            Mode::Dedupe => {
                self.console.section(&format!("Deduplicate called for {:?}", input));
                self.dedupe_individual(input)?
            }
            Mode::Combine => {
                self.console.section(&format!("Combining and deduplicating lists from {:?}", input));
                vec![self.combine(input)?]
            }
        };

        if self.config.show_stats && !self.console.is_quiet() {
            self.stats.print_summary(&self.config.output_dir);
        }

        Ok(written)
    }

    fn validate(&self, input: &Path) -> anyhow::Result<()> {
        if !input.is_file() && !input.is_dir() {
            return Err(DedupeError::InvalidInputPath(input.to_path_buf()).into());
        }
        if self.config.mode == Mode::Combine && !input.is_dir() {
            return Err(DedupeError::InvalidCombineTarget(input.to_path_buf()).into());
        }
        Ok(())
    }

    fn prepare_output_dir(&self) -> anyhow::Result<()> {
        let dir = &self.config.output_dir;
        let created = ensure_output_dir(dir)?;

        if created {
            self.console.note(&format!("Creating output directory {:?}", dir));
        } else {
            self.console.note(&format!("Output directory {:?} already exists", dir));
        }
        Ok(())
    }

    /// Dedupe each wordlist on its own, keeping its file name
    fn dedupe_individual(&self, input: &Path) -> anyhow::Result<Vec<WriteSummary>> {
        let targets = if input.is_dir() {
            collect_wordlists(input)?
        } else {
            vec![input.to_path_buf()]
        };

        if targets.is_empty() {
            self.console.warn(&format!("No wordlists (*.txt) found in {:?}", input));
            return Ok(Vec::new());
        }

        let mut written = Vec::with_capacity(targets.len());
        for target in &targets {
            let filename = target
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("Input has no file name: {:?}", target))?;

            let words = self.collect(target)?;
            let output_path = self.config.output_dir.join(filename);
            written.push(self.write(words, &output_path)?);
        }

        Ok(written)
    }

    /// Merge every wordlist of a directory into the combined output
    fn combine(&self, input: &Path) -> anyhow::Result<WriteSummary> {
        let words = self.collect(input)?;
        let output_path = self.config.output_dir.join(COMBINED_OUTPUT_NAME);
        self.write(words, &output_path)
    }

    fn collect(&self, path: &Path) -> anyhow::Result<WordSet> {
        let pb = self.console.spinner();

        let result = dedupe_path_with(path, &self.normalizer, |file| {
            let size = fs::metadata(file).map(|m| m.len()).unwrap_or(0);
            self.stats.add_file(size);

            let name = file.file_name().unwrap_or(file.as_os_str());
            pb.set_message(format!("Processing {:?}...", name));
            pb.suspend(|| self.console.note(&format!("Processing {:?} ({})", name, ByteSize(size))));
            log::debug!("Reading {:?}", file);
        });
        pb.finish_and_clear();

        let words = result?;
        self.stats.add_dedup(words.stats());
        Ok(words)
    }

    fn write(&self, words: WordSet, output_path: &Path) -> anyhow::Result<WriteSummary> {
        self.console.note(&format!("Writing {} unique lines to {:?}", words.len(), output_path));

        let summary = write_wordlist(output_path, words.into_lines(self.config.sort_output))?;
        self.stats.add_output();

        self.console.done(&format!(
            "Output written to: {:?} ({})",
            summary.path,
            ByteSize(summary.bytes_written)
        ));
        log::debug!("Wrote {} lines to {:?}", summary.lines_written, summary.path);

        Ok(summary)
    }

    /// Get processing statistics
    pub fn stats(&self) -> &ProcessingStats {
        &self.stats
    }
}
