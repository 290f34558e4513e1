use std::path::PathBuf;

use thiserror::Error;

/// Errors from settings and theme I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed.
    #[error("failed to read {path}: {message}")]
    Read {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O message.
        message: String,
    },
    /// Writing a file failed.
    #[error("failed to write {path}: {message}")]
    Write {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O message.
        message: String,
    },
    /// A settings or theme document did not parse.
    #[error("failed to parse {path}: {message}")]
    Parse {
        /// The file involved.
        path: PathBuf,
        /// The parser's message, with location where available.
        message: String,
    },
}

impl Error {
    /// One-line human-readable rendering.
    pub fn pretty(&self) -> String {
        self.to_string()
    }
}
