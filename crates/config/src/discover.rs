//! Extension and background discovery.

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

/// File whose presence marks a directory as an extension.
pub const EVENT_MAP_FILE: &str = "event_map.yaml";

const BACKGROUND_EXTENSIONS: &[&str] = &["png", "gif", "jpg", "jpeg", "bmp"];

/// List extension names found across `search_dirs`.
///
/// An extension is a subdirectory containing an `event_map.yaml`. Names are
/// returned sorted and de-duplicated; when the same name appears in several
/// search directories the earlier directory wins at lookup time.
pub fn discover_extensions(search_dirs: &[PathBuf]) -> Vec<String> {
    let mut names = BTreeSet::new();
    for dir in search_dirs {
        let Ok(entries) = fs::read_dir(dir) else {
            debug!(dir = %dir.display(), "extension directory not readable, skipping");
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() && path.join(EVENT_MAP_FILE).is_file() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.insert(name.to_string());
                }
            }
        }
    }
    names.into_iter().collect()
}

/// Resolve `name` to an extension directory, searching in priority order.
pub fn extension_dir(name: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    search_dirs
        .iter()
        .map(|dir| dir.join(name))
        .find(|path| path.join(EVENT_MAP_FILE).is_file())
}

/// List image files directly under `dir`, sorted by name.
pub fn discover_backgrounds(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut found: Vec<PathBuf> = entries
        .flatten()
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(|e| BACKGROUND_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        })
        .collect();
    found.sort();
    found
}
