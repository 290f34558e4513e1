//! Media handles, named collections, and the startup resource catalog.
//!
//! Collections are populated once at startup by scanning directories and are
//! read-only afterwards. At most two collections exist per media kind: the
//! built-in default collection and, when an extension is active, the
//! extension's own. They never merge; selection policies decide which one to
//! query.

use std::path::PathBuf;

mod blacklist;
mod catalog;
mod collection;
mod error;

pub use blacklist::Blacklist;
pub use catalog::{Blacklists, Catalog};
pub use collection::Collection;
pub use error::Error;

/// The two kinds of media the toy plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// An audio clip.
    Sound,
    /// A still image.
    Image,
}

impl MediaKind {
    /// File extensions recognized for this kind, lower case without the dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Sound => &["wav", "ogg"],
            Self::Image => &["png", "gif", "jpg", "jpeg", "bmp"],
        }
    }

    /// Lower-case label used in log messages and collection names.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sound => "sound",
            Self::Image => "image",
        }
    }
}

/// One loaded media item: its file name, where it came from, and its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaHandle {
    /// File name within its source directory, e.g. `"a.ogg"`.
    pub name: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// Whether this is a sound or an image.
    pub kind: MediaKind,
}
