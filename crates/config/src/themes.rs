//! Theme registry.
//!
//! A theme bundles a background color, a glyph color palette, and hints about
//! which extension collections suit it. The built-in set is compiled in; user
//! themes load from `*.yaml` files in a themes directory and override
//! built-ins by name.

use std::{collections::BTreeMap, fs, path::Path};

use serde::Deserialize;
use tracing::warn;

/// An RGB color triple.
pub type Rgb = (u8, u8, u8);

/// A named visual theme.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    /// Registry key.
    pub name: String,
    /// Human-readable name.
    pub display_name: String,
    /// Short description.
    pub description: String,
    /// Window background color.
    pub background_color: Rgb,
    /// Optional background image path.
    pub background_image: Option<String>,
    /// Glyph fill colors.
    pub color_palette: Vec<Rgb>,
    /// Extension names this theme pairs well with.
    pub extensions: Vec<String>,
    /// Disabled themes are hidden from listing but still resolvable.
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: String::new(),
            display_name: String::new(),
            description: String::new(),
            background_color: (250, 250, 250),
            background_image: None,
            color_palette: Vec::new(),
            extensions: Vec::new(),
            enabled: true,
        }
    }
}

fn builtin(
    name: &str,
    display_name: &str,
    description: &str,
    background_color: Rgb,
    color_palette: &[Rgb],
    extensions: &[&str],
) -> Theme {
    Theme {
        name: name.to_string(),
        display_name: display_name.to_string(),
        description: description.to_string(),
        background_color,
        background_image: None,
        color_palette: color_palette.to_vec(),
        extensions: extensions.iter().map(|s| (*s).to_string()).collect(),
        enabled: true,
    }
}

fn builtin_themes() -> Vec<Theme> {
    vec![
        builtin(
            "default",
            "Default",
            "The classic look",
            (250, 250, 250),
            &[
                (0, 0, 255),
                (255, 0, 0),
                (255, 255, 0),
                (255, 0, 128),
                (0, 0, 128),
                (0, 255, 0),
                (255, 128, 0),
                (255, 0, 255),
                (0, 255, 255),
            ],
            &[],
        ),
        builtin(
            "dark",
            "Dark Mode",
            "Easy on the eyes, dark background",
            (0, 0, 0),
            &[
                (100, 100, 255),
                (255, 100, 100),
                (255, 255, 100),
                (255, 100, 200),
                (100, 100, 200),
                (100, 255, 100),
                (255, 180, 100),
                (255, 100, 255),
                (100, 255, 255),
            ],
            &[],
        ),
        builtin(
            "farm",
            "Farm Friends",
            "Barn animals and farm sounds",
            (200, 230, 200),
            &[
                (139, 69, 19),
                (34, 139, 34),
                (255, 215, 0),
                (255, 99, 71),
                (255, 182, 193),
                (144, 238, 144),
            ],
            &["animals", "farm"],
        ),
        builtin(
            "ocean",
            "Ocean Adventure",
            "Sea creatures and wave sounds",
            (200, 220, 255),
            &[
                (0, 105, 148),
                (64, 224, 208),
                (0, 191, 255),
                (255, 127, 80),
                (255, 218, 185),
                (147, 112, 219),
            ],
            &["ocean", "sea-animals"],
        ),
        builtin(
            "space",
            "Space Explorer",
            "Planets, rockets, and cosmic sounds",
            (10, 10, 30),
            &[
                (255, 255, 255),
                (255, 215, 0),
                (192, 192, 192),
                (255, 100, 100),
                (100, 200, 255),
                (200, 100, 255),
            ],
            &["space", "sci-fi"],
        ),
        builtin(
            "music",
            "Music Class",
            "Musical instruments and notes",
            (255, 250, 240),
            &[
                (255, 0, 0),
                (255, 127, 0),
                (255, 255, 0),
                (0, 255, 0),
                (0, 0, 255),
                (75, 0, 130),
                (148, 0, 211),
            ],
            &["instruments", "music"],
        ),
        builtin(
            "nature",
            "Nature Walk",
            "Birds, insects, and outdoor sounds",
            (230, 245, 220),
            &[
                (34, 139, 34),
                (107, 142, 35),
                (85, 107, 47),
                (255, 228, 181),
                (210, 180, 140),
                (139, 90, 43),
            ],
            &["nature", "animals"],
        ),
    ]
}

/// All known themes, built-ins plus any user overrides.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, Theme>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    /// The compiled-in themes only.
    pub fn builtin() -> Self {
        let themes = builtin_themes()
            .into_iter()
            .map(|t| (t.name.clone(), t))
            .collect();
        Self { themes }
    }

    /// Built-ins plus user themes from `*.yaml` files under `dir`.
    ///
    /// A user theme with a built-in's name replaces it. Files that fail to
    /// read or parse are skipped with a warning; one bad theme never blocks
    /// the rest.
    pub fn load(dir: &Path) -> Self {
        let mut registry = Self::builtin();
        let Ok(entries) = fs::read_dir(dir) else {
            return registry;
        };
        let mut paths: Vec<_> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("yaml"))
            .collect();
        paths.sort();
        for path in paths {
            let data = match fs::read_to_string(&path) {
                Ok(d) => d,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable theme");
                    continue;
                }
            };
            let mut theme: Theme = match serde_yaml::from_str(&data) {
                Ok(t) => t,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping malformed theme");
                    continue;
                }
            };
            if theme.name.is_empty() {
                theme.name = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string();
            }
            if theme.display_name.is_empty() {
                theme.display_name = theme.name.clone();
            }
            registry.themes.insert(theme.name.clone(), theme);
        }
        registry
    }

    /// Names of all enabled themes, sorted.
    pub fn list(&self) -> Vec<&str> {
        self.themes
            .values()
            .filter(|t| t.enabled)
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Look up a theme by name.
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Whether `name` is a known theme.
    pub fn exists(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// An enabled theme other than `current`, chosen by `pick_index` over the
    /// candidate count. Returns `None` when no other enabled theme exists.
    pub fn random_other(
        &self,
        current: &str,
        pick_index: impl FnOnce(usize) -> usize,
    ) -> Option<&Theme> {
        let candidates: Vec<&Theme> = self
            .themes
            .values()
            .filter(|t| t.enabled && t.name != current)
            .collect();
        if candidates.is_empty() {
            return None;
        }
        let i = pick_index(candidates.len()).min(candidates.len() - 1);
        Some(candidates[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_are_present_and_listed_sorted() {
        let registry = ThemeRegistry::builtin();
        assert_eq!(
            registry.list(),
            vec!["dark", "default", "farm", "music", "nature", "ocean", "space"]
        );
        let space = registry.get("space").unwrap();
        assert_eq!(space.background_color, (10, 10, 30));
        assert!(!space.color_palette.is_empty());
        assert!(registry.exists("default"));
        assert!(!registry.exists("neon"));
    }

    #[test]
    fn user_themes_load_and_override_builtins() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("neon.yaml"),
            "name: neon\ndisplay_name: Neon\nbackground_color: [5, 5, 5]\ncolor_palette:\n  - [0, 255, 0]\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("dark.yaml"),
            "name: dark\ndisplay_name: Darker\nbackground_color: [1, 1, 1]\n",
        )
        .unwrap();

        let registry = ThemeRegistry::load(dir.path());
        assert_eq!(registry.get("neon").unwrap().color_palette, vec![(0, 255, 0)]);
        let dark = registry.get("dark").unwrap();
        assert_eq!(dark.display_name, "Darker");
        assert_eq!(dark.background_color, (1, 1, 1));
    }

    #[test]
    fn malformed_theme_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("broken.yaml"), ": not yaml [").unwrap();
        fs::write(dir.path().join("ok.yaml"), "name: ok\n").unwrap();
        let registry = ThemeRegistry::load(dir.path());
        assert!(registry.exists("ok"));
        assert!(!registry.exists("broken"));
    }

    #[test]
    fn nameless_user_theme_takes_its_file_stem() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sunset.yaml"), "description: warm\n").unwrap();
        let registry = ThemeRegistry::load(dir.path());
        let theme = registry.get("sunset").unwrap();
        assert_eq!(theme.display_name, "sunset");
    }

    #[test]
    fn random_other_excludes_the_current_theme() {
        let registry = ThemeRegistry::builtin();
        for i in 0..6 {
            let theme = registry.random_other("default", |_| i).unwrap();
            assert_ne!(theme.name, "default");
        }
        let registry = {
            let mut only = ThemeRegistry::builtin();
            only.themes.retain(|name, _| name == "default");
            only
        };
        assert!(registry.random_other("default", |_| 0).is_none());
    }
}
