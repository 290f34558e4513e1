//! The startup resource catalog: default collections plus, when an
//! extension is active, the extension's own collections.

use std::path::Path;

use tracing::info;

use crate::{Blacklist, Collection, Error, MediaKind};

/// Both blacklists, bundled so catalog construction stays readable.
#[derive(Debug, Clone, Default)]
pub struct Blacklists {
    /// Patterns excluding sound files.
    pub sound: Blacklist,
    /// Patterns excluding image files.
    pub image: Blacklist,
}

impl Blacklists {
    /// The blacklist for `kind`.
    fn for_kind(&self, kind: MediaKind) -> &Blacklist {
        match kind {
            MediaKind::Sound => &self.sound,
            MediaKind::Image => &self.image,
        }
    }
}

/// The loaded set of collections for one run. Built once at startup,
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct Catalog {
    sounds: Collection,
    images: Collection,
    extension_sounds: Option<Collection>,
    extension_images: Option<Collection>,
}

impl Catalog {
    /// Scan the default data directory and, if given, an extension directory.
    ///
    /// Either directory may keep sounds and images in `sounds/` and `images/`
    /// subdirectories; when a subdirectory is absent the directory itself is
    /// scanned with the kind's extension filter.
    pub fn load(
        data_dir: &Path,
        extension: Option<(&str, &Path)>,
        blacklists: &Blacklists,
    ) -> Result<Self, Error> {
        let sounds = scan_source("default", data_dir, MediaKind::Sound, blacklists)?;
        let images = scan_source("default", data_dir, MediaKind::Image, blacklists)?;

        let (extension_sounds, extension_images) = match extension {
            Some((name, dir)) => {
                let s = scan_source(name, dir, MediaKind::Sound, blacklists)?;
                let i = scan_source(name, dir, MediaKind::Image, blacklists)?;
                (Some(s), Some(i))
            }
            None => (None, None),
        };

        info!(
            sounds = sounds.len(),
            images = images.len(),
            extension = extension.map(|(name, _)| name).unwrap_or("none"),
            "catalog loaded"
        );
        Ok(Self {
            sounds,
            images,
            extension_sounds,
            extension_images,
        })
    }

    /// The built-in default collection for `kind`.
    pub fn default_collection(&self, kind: MediaKind) -> &Collection {
        match kind {
            MediaKind::Sound => &self.sounds,
            MediaKind::Image => &self.images,
        }
    }

    /// The active extension's collection for `kind`, if an extension is loaded.
    pub fn extension_collection(&self, kind: MediaKind) -> Option<&Collection> {
        match kind {
            MediaKind::Sound => self.extension_sounds.as_ref(),
            MediaKind::Image => self.extension_images.as_ref(),
        }
    }

    /// Build a catalog from already-scanned collections (tests, embedding).
    pub fn from_collections(
        sounds: Collection,
        images: Collection,
        extension_sounds: Option<Collection>,
        extension_images: Option<Collection>,
    ) -> Self {
        Self {
            sounds,
            images,
            extension_sounds,
            extension_images,
        }
    }
}

/// Scan one source directory for one kind, honoring `sounds/` / `images/`
/// subdirectories when present.
fn scan_source(
    source: &str,
    base: &Path,
    kind: MediaKind,
    blacklists: &Blacklists,
) -> Result<Collection, Error> {
    let sub = base.join(match kind {
        MediaKind::Sound => "sounds",
        MediaKind::Image => "images",
    });
    let dir = if sub.is_dir() { sub.as_path() } else { base };
    let name = format!("{}/{}", source, kind.label());
    Collection::scan(name, dir, kind, blacklists.for_kind(kind))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use super::*;

    #[test]
    fn loads_mixed_directory_and_extension_subdirs() {
        let data = tempfile::tempdir().unwrap();
        File::create(data.path().join("beep.ogg")).unwrap();
        File::create(data.path().join("star.png")).unwrap();

        let ext = tempfile::tempdir().unwrap();
        fs::create_dir(ext.path().join("sounds")).unwrap();
        fs::create_dir(ext.path().join("images")).unwrap();
        File::create(ext.path().join("sounds/moo.ogg")).unwrap();
        File::create(ext.path().join("images/cow.gif")).unwrap();

        let catalog = Catalog::load(
            data.path(),
            Some(("farm", ext.path())),
            &Blacklists::default(),
        )
        .unwrap();

        assert_eq!(catalog.default_collection(MediaKind::Sound).len(), 1);
        assert_eq!(catalog.default_collection(MediaKind::Image).len(), 1);
        let ext_sounds = catalog.extension_collection(MediaKind::Sound).unwrap();
        assert!(ext_sounds.by_name("moo.ogg").is_some());
        assert_eq!(ext_sounds.name(), "farm/sound");
        assert!(
            catalog
                .extension_collection(MediaKind::Image)
                .unwrap()
                .by_name("cow.gif")
                .is_some()
        );
    }

    #[test]
    fn no_extension_means_no_extension_collections() {
        let data = tempfile::tempdir().unwrap();
        File::create(data.path().join("beep.wav")).unwrap();
        let catalog = Catalog::load(data.path(), None, &Blacklists::default()).unwrap();
        assert!(catalog.extension_collection(MediaKind::Sound).is_none());
        assert!(catalog.extension_collection(MediaKind::Image).is_none());
    }
}
