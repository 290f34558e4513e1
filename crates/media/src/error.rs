use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building collections at startup.
#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("{message}")]
    /// I/O or filesystem read error while scanning a directory.
    Read {
        /// Path associated with the read error.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },
    #[error("invalid blacklist pattern '{pattern}': {message}")]
    /// A blacklist glob pattern failed to compile.
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Why it failed to compile.
        message: String,
    },
}

impl Error {
    /// Render a human-friendly error message.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => {
                format!("Read error at {}: {}", path.display(), message)
            }
            Self::Pattern { .. } => self.to_string(),
        }
    }
}
