//! Error types for xmlfmt.
//!
//! Formatting itself cannot fail; only the surrounding file handling,
//! configuration loading and token serialization can.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The input file is missing, unreadable or not valid UTF-8.
    #[error("read failed on input file {}: {source}", .path.display())]
    InputRead { path: PathBuf, source: io::Error },

    /// The output file could not be created or written.
    #[error("write failed on output file {}: {source}", .path.display())]
    OutputWrite { path: PathBuf, source: io::Error },

    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),
}
