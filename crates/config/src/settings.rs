//! Persistent user settings.
//!
//! Stored as JSON. A missing file yields the defaults; a present but
//! unreadable or invalid file is an error the caller may choose to downgrade
//! to a warning plus defaults.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Error;

/// Display-related settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark background instead of the light default.
    pub dark_mode: bool,
    /// Render glyphs upper-cased.
    pub uppercase: bool,
    /// Start in fullscreen.
    pub fullscreen: bool,
    /// Active theme name.
    pub theme: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            uppercase: false,
            fullscreen: true,
            theme: "default".to_string(),
        }
    }
}

/// Audio-related settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AudioSettings {
    /// Start with sound muted.
    pub start_muted: bool,
    /// Whether sounds play at all.
    pub sound_enabled: bool,
    /// Same key always plays the same sound.
    pub deterministic_sounds: bool,
    /// Glob patterns for sound files to exclude.
    pub sound_blacklist: Vec<String>,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            start_muted: false,
            sound_enabled: true,
            deterministic_sounds: false,
            sound_blacklist: Vec::new(),
        }
    }
}

/// One keypress trigger's configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TriggerSettings {
    /// Whether the trigger is active.
    pub enabled: bool,
    /// Lower bound of the keypress-count draw.
    pub min: u32,
    /// Upper bound of the keypress-count draw.
    pub max: u32,
}

impl Default for TriggerSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            min: 50,
            max: 100,
        }
    }
}

/// Keypress-count trigger settings for mid-run swaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TriggersSettings {
    /// Theme swap trigger.
    pub theme_change: TriggerSettings,
    /// Background swap trigger.
    pub background_change: TriggerSettings,
}

/// Background image settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackgroundSettings {
    /// A fixed background image path, if set.
    pub custom_path: Option<String>,
    /// Images to rotate through on background swaps.
    pub rotation: Vec<String>,
}

/// The full persistent settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Display settings.
    pub display: DisplaySettings,
    /// Audio settings.
    pub audio: AudioSettings,
    /// Name of the extension to load, if any.
    pub current_extension: Option<String>,
    /// Keypress trigger configuration.
    pub triggers: TriggersSettings,
    /// Background image configuration.
    pub background: BackgroundSettings,
    /// Keep the pointer inside the window.
    pub sticky_mouse: bool,
    /// Glob patterns for image files to exclude.
    pub image_blacklist: Vec<String>,
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file is not an error and yields the defaults. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path).map_err(|e| Error::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&data).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write settings to `path`, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Write {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        let data = serde_json::to_string_pretty(self).map_err(|e| Error::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, data).map_err(|e| Error::Write {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.audio.sound_enabled);
        assert_eq!(settings.display.theme, "default");
    }

    #[test]
    fn save_creates_parents_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut settings = Settings::default();
        settings.display.uppercase = true;
        settings.audio.deterministic_sounds = true;
        settings.current_extension = Some("animals".to_string());
        settings.image_blacklist.push("*.tmp".to_string());
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn unknown_and_missing_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"display": {"dark_mode": true}, "future_field": 12}"#,
        )
        .unwrap();
        let settings = Settings::load(&path).unwrap();
        assert!(settings.display.dark_mode);
        // Unspecified fields keep their defaults.
        assert!(settings.display.fullscreen);
        assert_eq!(settings.triggers.theme_change.min, 50);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{not json").unwrap();
        match Settings::load(&path) {
            Err(Error::Parse { .. }) => {}
            other => panic!("{:?}", other.map(|_| ())),
        }
    }
}
