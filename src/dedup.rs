//! Set-based deduplication of normalized lines
//!
//! A `WordSet` is filled from one wordlist (dedupe mode) or from every
//! wordlist of a directory (combine mode) and consumed once by the writer.

use crate::cli::Normalization;
use crate::encoding::{detect_encoding, read_raw, read_wordlist, LineDecoder};
use crate::error::DedupeError;
use crate::input::collect_wordlists;
use crate::normalize::Normalizer;

use ahash::RandomState;
use hashbrown::HashSet;
use std::path::Path;

/// Statistics for deduplication operations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupStats {
    /// Total items processed
    pub total_processed: u64,
    /// Unique items found
    pub unique_count: u64,
    /// Duplicate items found
    pub duplicate_count: u64,
}

impl DedupStats {
    pub fn record_unique(&mut self) {
        self.total_processed += 1;
        self.unique_count += 1;
    }

    pub fn record_duplicate(&mut self) {
        self.total_processed += 1;
        self.duplicate_count += 1;
    }
}

/// Set of unique normalized lines
#[derive(Debug, Default)]
pub struct WordSet {
    set: HashSet<String, RandomState>,
    stats: DedupStats,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a normalized line. Returns true if it was not seen before.
    pub fn insert(&mut self, word: String) -> bool {
        if self.set.insert(word) {
            self.stats.record_unique();
            true
        } else {
            self.stats.record_duplicate();
            false
        }
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn stats(&self) -> DedupStats {
        self.stats
    }

    /// Read one wordlist from disk and add all of its normalized lines.
    ///
    /// Legacy normalization sees the file byte for byte; lossy normalization
    /// reads it with BOM handling and a per-file fallback encoding.
    pub fn absorb_file(&mut self, path: &Path, normalizer: &Normalizer) -> anyhow::Result<()> {
        let (content, decoder) = match normalizer.strategy() {
            Normalization::Legacy => (read_raw(path)?, LineDecoder::default()),
            Normalization::Lossy => {
                let content = read_wordlist(path)?;
                let info = detect_encoding(&content);
                if !info.is_utf8 {
                    log::info!("{:?} is not valid UTF-8, decoding invalid lines as {}", path, info.name);
                }
                (content, LineDecoder::from_info(&info))
            }
        };

        let before = self.stats;
        normalizer.for_each_line(&content, &decoder, |word| {
            self.insert(word);
        });

        log::debug!(
            "{:?}: {} lines, {} new, {} duplicates",
            path,
            self.stats.total_processed - before.total_processed,
            self.stats.unique_count - before.unique_count,
            self.stats.duplicate_count - before.duplicate_count,
        );
        Ok(())
    }

    /// Consume the set, optionally sorted. Without sorting the order is unspecified.
    pub fn into_lines(self, sorted: bool) -> Vec<String> {
        let mut lines: Vec<String> = self.set.into_iter().collect();
        if sorted {
            lines.sort_unstable();
        }
        lines
    }
}

/// Build the set of unique normalized lines for a file, or for all wordlists
/// directly inside a directory taken as one combined stream.
pub fn dedupe_path(path: &Path, normalizer: &Normalizer) -> anyhow::Result<WordSet> {
    dedupe_path_with(path, normalizer, |_| {})
}

/// Same as [`dedupe_path`], calling `on_file` before each wordlist is read.
pub fn dedupe_path_with<F>(path: &Path, normalizer: &Normalizer, mut on_file: F) -> anyhow::Result<WordSet>
where
    F: FnMut(&Path),
{
    let mut words = WordSet::new();

    if path.is_dir() {
        for wordlist in collect_wordlists(path)? {
            on_file(&wordlist);
            words.absorb_file(&wordlist, normalizer)?;
        }
    } else if path.is_file() {
        on_file(path);
        words.absorb_file(path, normalizer)?;
    } else {
        return Err(DedupeError::InvalidInputPath(path.to_path_buf()).into());
    }

    Ok(words)
}
