//! Error types for rule document loading and validation.

use std::{
    cmp::{max, min},
    fmt::Write as _,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{API_VERSION, Channel};

/// Errors produced while loading, parsing, or validating a rule document.
#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("{message}")]
    /// I/O or filesystem read error.
    Read {
        /// Path associated with the read error.
        path: PathBuf,
        /// Human-readable error message.
        message: String,
    },
    #[error("{message}")]
    /// YAML parse error, with a location and excerpt when the parser has one.
    Parse {
        /// Optional path associated with the parse error.
        path: Option<PathBuf>,
        /// Optional 1-based line number.
        line: Option<usize>,
        /// Optional 1-based column number.
        col: Option<usize>,
        /// Human-readable error message.
        message: String,
        /// Optional excerpt including a caret at the error location.
        excerpt: Option<String>,
    },
    #[error("unsupported apiVersion")]
    /// The document's version field is missing or not the supported value.
    UnsupportedVersion {
        /// The version the document declared, if any.
        found: Option<i64>,
    },
    #[error("malformed {channel} rule {index}: {message}")]
    /// A rule or condition does not conform to the schema.
    MalformedRule {
        /// The channel whose rule list contains the bad rule.
        channel: Channel,
        /// 0-based index of the rule within its list.
        index: usize,
        /// What is wrong with it.
        message: String,
    },
}

impl Error {
    /// Render a human-friendly error message including location and an excerpt
    /// when available.
    pub fn pretty(&self) -> String {
        match self {
            Self::Read { path, message } => {
                format!("Read error at {}: {}", path.display(), message)
            }
            Self::Parse {
                path,
                line,
                col,
                message,
                excerpt,
            } => {
                let mut out = String::new();
                match (path, line, col) {
                    (Some(p), Some(l), Some(c)) => {
                        let _ignored =
                            writeln!(out, "Event map parse error at {}:{}:{}", p.display(), l, c);
                    }
                    (Some(p), _, _) => {
                        let _ignored = writeln!(out, "Event map parse error at {}", p.display());
                    }
                    (None, Some(l), Some(c)) => {
                        let _ignored =
                            writeln!(out, "Event map parse error at line {}, column {}", l, c);
                    }
                    _ => {
                        let _ignored = writeln!(out, "Event map parse error");
                    }
                }
                let _ignored = write!(out, "{}", message);
                if let Some(ex) = excerpt {
                    let _ignored = write!(out, "\n{}", ex);
                }
                out
            }
            Self::UnsupportedVersion { found } => match found {
                Some(v) => format!(
                    "Unsupported event map apiVersion {} (this build supports {})",
                    v, API_VERSION
                ),
                None => format!(
                    "Event map is missing the required apiVersion field (expected {})",
                    API_VERSION
                ),
            },
            Self::MalformedRule {
                channel,
                index,
                message,
            } => format!("Malformed {} rule at index {}: {}", channel, index, message),
        }
    }

    /// Access the optional path attached to this error.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } => Some(path),
            Self::Parse { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

/// Build a small 2-3 line excerpt with a caret at `(line_no, col_no)`.
pub fn excerpt_at(source: &str, line_no: usize, col_no: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let total = lines.len();
    let start = max(1usize, line_no.saturating_sub(2));
    let end = min(total, line_no + 1);

    let mut out = String::new();
    for n in start..=end {
        let text = lines.get(n - 1).copied().unwrap_or("");
        let _ignored = writeln!(out, " {:>4} | {}", n, text);
        if n == line_no {
            let prefix = format!(" {:>4} | ", n);
            let _ignored = writeln!(
                out,
                "{}{}^",
                " ".repeat(prefix.len()),
                " ".repeat(col_no.saturating_sub(1))
            );
        }
    }
    out
}
