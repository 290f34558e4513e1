//! Declarative event-to-media rule documents.
//!
//! An extension redefines how input events map to sounds and images by
//! shipping an `event_map.yaml`: a versioned document with an ordered rule
//! list per channel. This crate owns the document schema, parses it, and
//! validates it into fully-typed [`RuleSet`]s before any event is processed.
//!
//! The document format is the one bit-exact external contract of the
//! workspace: a mapping with a required integer `apiVersion` (only
//! [`API_VERSION`] is valid) and optional `image`/`sound` rule lists, where
//! each rule is `{check: [condition...], policy: string, args: [...]}`.

use std::{fs, path::Path};

mod error;
mod raw;
mod rules;

#[cfg(test)]
mod test_parse;

pub use error::{Error, excerpt_at};
pub use rules::{Channel, Condition, PolicyKind, Rule, RuleSet};

/// The only rule document version this build understands.
pub const API_VERSION: i64 = 0;

/// A validated rule document: one optional rule list per channel.
///
/// An absent channel means the extension does not redefine it and the legacy
/// mapper stays in charge; a present-but-empty list means every event falls
/// through to the guaranteed random fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventMap {
    /// Rules for the sound channel, in document order.
    pub sound: Option<RuleSet>,
    /// Rules for the image channel, in document order.
    pub image: Option<RuleSet>,
}

/// Parse and validate a rule document from YAML text.
///
/// `path` is only used to locate errors; pass `None` for in-memory documents.
pub fn load_from_str(doc: &str, path: Option<&Path>) -> Result<EventMap, Error> {
    let raw: raw::RawEventMap =
        serde_yaml::from_str(doc).map_err(|e| parse_error(doc, &e, path))?;
    raw.validate()
}

/// Read, parse, and validate a rule document from disk.
pub fn load_from_path(path: &Path) -> Result<EventMap, Error> {
    let doc = fs::read_to_string(path).map_err(|e| Error::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    load_from_str(&doc, Some(path))
}

/// Convert a YAML error into a located parse error with an excerpt.
fn parse_error(source: &str, err: &serde_yaml::Error, path: Option<&Path>) -> Error {
    let loc = err.location();
    Error::Parse {
        path: path.map(Path::to_path_buf),
        line: loc.as_ref().map(serde_yaml::Location::line),
        col: loc.as_ref().map(serde_yaml::Location::column),
        message: err.to_string(),
        excerpt: loc.map(|l| excerpt_at(source, l.line(), l.column())),
    }
}
