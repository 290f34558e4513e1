//! Glob-pattern blacklists applied while scanning media directories.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::Error;

/// A compiled set of file-name glob patterns to exclude from collections.
///
/// Patterns match against bare file names, case-insensitively, so
/// `"cow*.ogg"` excludes `Cow1.OGG` wherever it lives.
#[derive(Debug, Clone)]
pub struct Blacklist {
    set: GlobSet,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::empty()
    }
}

impl Blacklist {
    /// A blacklist that excludes nothing.
    pub fn empty() -> Self {
        Self {
            set: GlobSet::empty(),
        }
    }

    /// Compile a set of glob patterns.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self, Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let glob = GlobBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| Error::Pattern {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|e| Error::Pattern {
            pattern: String::new(),
            message: e.to_string(),
        })?;
        Ok(Self { set })
    }

    /// Whether `name` is excluded.
    pub fn matches(&self, name: &str) -> bool {
        self.set.is_match(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_excludes_nothing() {
        assert!(!Blacklist::empty().matches("anything.ogg"));
    }

    #[test]
    fn patterns_match_case_insensitively() {
        let bl = Blacklist::new(&["cow*.ogg", "*.bmp"]).unwrap();
        assert!(bl.matches("cow1.ogg"));
        assert!(bl.matches("Cow1.OGG"));
        assert!(bl.matches("splat.bmp"));
        assert!(!bl.matches("duck.ogg"));
    }

    #[test]
    fn bad_pattern_is_an_error() {
        assert!(matches!(
            Blacklist::new(&["[unclosed"]),
            Err(Error::Pattern { .. })
        ));
    }
}
