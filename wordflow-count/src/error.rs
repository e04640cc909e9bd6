use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading input, writing output, spilling partials, or
/// validating options.
/// Counting itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid delimiter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Spill encoding failed: {0}")]
    Spill(#[from] bincode::Error),

    #[error("Invalid options: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
