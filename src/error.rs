//! Error types for wordlist-dedupe.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DedupeError {
    #[error("The input path provided is not a file or directory: {0:?}")]
    InvalidInputPath(PathBuf),

    #[error("Input path is not a directory with text files: {0:?}")]
    InvalidCombineTarget(PathBuf),
}
