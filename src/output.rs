//! Output management module
//!
//! Writes deduplicated wordlists to disk, one entry per line.

use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default buffer size for file writing (8MB)
const DEFAULT_BUFFER_SIZE: usize = 8 * 1024 * 1024;

/// File name used by combine mode
pub const COMBINED_OUTPUT_NAME: &str = "combined_wordlist.txt";

/// What a finished write produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteSummary {
    pub path: PathBuf,
    pub lines_written: u64,
    pub bytes_written: u64,
}

/// Output file writer with buffering
///
/// Entries are separated by `\n`; the last entry is not followed by one.
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
    bytes_written: u64,
}

impl OutputWriter {
    /// Create a new output writer, truncating any existing file
    pub fn new(path: PathBuf, buffer_size: usize) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .with_context(|| format!("Can't create output file: {:?}", path))?;

        let writer = BufWriter::with_capacity(buffer_size, file);

        Ok(Self {
            writer,
            path,
            lines_written: 0,
            bytes_written: 0,
        })
    }

    /// Append an entry
    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        if self.lines_written > 0 {
            self.writer.write_all(b"\n")?;
            self.bytes_written += 1;
        }
        self.writer.write_all(line.as_bytes())?;
        self.lines_written += 1;
        self.bytes_written += line.len() as u64;
        Ok(())
    }

    /// Flush to disk and report what was written
    pub fn finish(mut self) -> anyhow::Result<WriteSummary> {
        self.writer
            .flush()
            .with_context(|| format!("Error writing file: {:?}", self.path))?;

        Ok(WriteSummary {
            path: self.path,
            lines_written: self.lines_written,
            bytes_written: self.bytes_written,
        })
    }
}

/// Write `lines` to `path`, replacing whatever was there.
pub fn write_wordlist<I, S>(path: &Path, lines: I) -> anyhow::Result<WriteSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = OutputWriter::new(path.to_path_buf(), DEFAULT_BUFFER_SIZE)?;
    for line in lines {
        writer.write_line(line.as_ref())?;
    }
    writer.finish()
}

/// Ensure output directory exists. Returns true if it had to be created.
pub fn ensure_output_dir(path: &Path) -> anyhow::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(path)
        .with_context(|| format!("Can't create output directory: {:?}", path))?;
    Ok(true)
}
