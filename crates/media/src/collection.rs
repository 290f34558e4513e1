//! Named, ordered, immutable collections of loaded media handles.

use std::{collections::HashMap, fs, path::Path};

use tracing::debug;

use crate::{Blacklist, Error, MediaHandle, MediaKind};

/// An immutable, named, ordered list of media handles from one directory.
///
/// Items are sorted by file name so that index-based policies are
/// reproducible across runs on the same file set.
#[derive(Debug, Clone)]
pub struct Collection {
    name: String,
    kind: MediaKind,
    items: Vec<MediaHandle>,
    by_name: HashMap<String, usize>,
}

impl Collection {
    /// Scan `dir` for files of `kind`, skipping blacklisted names.
    ///
    /// Subdirectories, unrecognized extensions, and non-UTF-8 file names are
    /// silently skipped; an unreadable directory is an error.
    pub fn scan(
        name: impl Into<String>,
        dir: &Path,
        kind: MediaKind,
        blacklist: &Blacklist,
    ) -> Result<Self, Error> {
        let name = name.into();
        let entries = fs::read_dir(dir).map_err(|e| Error::Read {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut items = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::Read {
                path: dir.to_path_buf(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !has_extension(file_name, kind) {
                continue;
            }
            if blacklist.matches(file_name) {
                debug!(collection = %name, file = %file_name, "blacklisted");
                continue;
            }
            items.push(MediaHandle {
                name: file_name.to_string(),
                path,
                kind,
            });
        }
        let collection = Self::from_items(name, kind, items);
        debug!(
            collection = %collection.name,
            kind = kind.label(),
            count = collection.len(),
            "scanned"
        );
        Ok(collection)
    }

    /// Build a collection from already-constructed handles.
    ///
    /// Items are sorted by name; later duplicates win the name index.
    pub fn from_items(name: impl Into<String>, kind: MediaKind, mut items: Vec<MediaHandle>) -> Self {
        items.sort_by(|a, b| a.name.cmp(&b.name));
        let by_name = items
            .iter()
            .enumerate()
            .map(|(i, h)| (h.name.clone(), i))
            .collect();
        Self {
            name: name.into(),
            kind,
            items,
            by_name,
        }
    }

    /// The collection's name, used in log messages and errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The media kind this collection holds.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, in sorted order.
    pub fn get(&self, index: usize) -> Option<&MediaHandle> {
        self.items.get(index)
    }

    /// Exact-name lookup.
    pub fn by_name(&self, name: &str) -> Option<&MediaHandle> {
        self.by_name.get(name).map(|&i| &self.items[i])
    }

    /// Iterate items in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &MediaHandle> {
        self.items.iter()
    }
}

/// Whether `file_name` carries one of the kind's recognized extensions.
fn has_extension(file_name: &str, kind: MediaKind) -> bool {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    kind.extensions().contains(&ext.as_str())
}
