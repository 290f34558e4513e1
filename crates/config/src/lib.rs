//! Persistent settings, well-known paths, extension discovery, and themes.

mod discover;
mod error;
mod paths;
mod settings;
mod themes;

pub use discover::{EVENT_MAP_FILE, discover_backgrounds, discover_extensions, extension_dir};
pub use error::Error;
pub use paths::{extension_search_dirs, settings_path, themes_dir};
pub use settings::{
    AudioSettings, BackgroundSettings, DisplaySettings, Settings, TriggerSettings,
    TriggersSettings,
};
pub use themes::{Rgb, Theme, ThemeRegistry};
