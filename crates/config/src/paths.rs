//! Well-known file locations, following the XDG base directory layout.

use std::{env, path::PathBuf};

const APP_DIR: &str = "keymash";

/// Path of the persistent settings file.
///
/// `$XDG_CONFIG_HOME/keymash/config.json`, falling back to
/// `~/.config/keymash/config.json`.
pub fn settings_path() -> PathBuf {
    config_home().join(APP_DIR).join("config.json")
}

/// Directory where user theme documents live.
pub fn themes_dir() -> PathBuf {
    config_home().join(APP_DIR).join("themes")
}

/// Directories searched for extension collections, in priority order.
///
/// The bundled data directory first, then the user's data home, then the
/// system-wide share directory.
pub fn extension_search_dirs(data_dir: &std::path::Path) -> Vec<PathBuf> {
    vec![
        data_dir.join("extensions"),
        data_home().join(APP_DIR).join("extensions"),
        PathBuf::from("/usr/share").join(APP_DIR).join("extensions"),
    ]
}

fn config_home() -> PathBuf {
    env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| home().join(".config"))
}

fn data_home() -> PathBuf {
    env::var_os("XDG_DATA_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| home().join(".local").join("share"))
}

fn home() -> PathBuf {
    env::var_os("HOME").map(PathBuf::from).unwrap_or_default()
}
