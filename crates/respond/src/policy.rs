//! Selection policies: resolve a policy request against the catalog.

use event::InputEvent;
use eventmap::PolicyKind;
use media::{Catalog, Collection, MediaHandle, MediaKind};

use crate::{SelectError, rng::RandomSource};

/// An RGB color triple.
pub type Rgb = (u8, u8, u8);

/// Maximum dimension, in pixels, a rendered glyph image may take.
pub const GLYPH_MAX_DIM: u32 = 640;

/// Glyph colors used when no theme palette is active.
pub const DEFAULT_PALETTE: &[Rgb] = &[
    (0, 0, 255),
    (255, 0, 0),
    (255, 255, 0),
    (255, 0, 128),
    (0, 0, 128),
    (0, 255, 0),
    (255, 128, 0),
    (255, 0, 255),
    (0, 255, 255),
];

/// A synthesized glyph image: the renderer draws `ch` in `color`, scaled to
/// at most `max_dim` pixels on its longer side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// The character to render.
    pub ch: char,
    /// Fill color.
    pub color: Rgb,
    /// Maximum image dimension in pixels.
    pub max_dim: u32,
}

/// What the image channel produced: a loaded file or a synthesized glyph.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageChoice {
    /// An image file from a collection.
    File(MediaHandle),
    /// A glyph to render on the fly.
    Glyph(Glyph),
}

/// Resolve a sound-channel policy request to a concrete handle.
pub(crate) fn select_sound(
    policy: PolicyKind,
    args: &[String],
    event: &InputEvent,
    catalog: &Catalog,
    rng: &mut RandomSource,
) -> Result<MediaHandle, SelectError> {
    let defaults = catalog.default_collection(MediaKind::Sound);
    match policy {
        PolicyKind::Deterministic => deterministic_pick(defaults, event.code),
        // Document validation rejects `font` for the sound channel; a
        // hand-built request degrades to the random fallback.
        PolicyKind::Random | PolicyKind::Font => random_pick(defaults, rng),
        PolicyKind::NamedFile => named_pick(catalog, MediaKind::Sound, args),
    }
}

/// Resolve an image-channel policy request to a file or a glyph.
pub(crate) fn select_image(
    policy: PolicyKind,
    args: &[String],
    event: &InputEvent,
    catalog: &Catalog,
    palette: &[Rgb],
    uppercase: bool,
    rng: &mut RandomSource,
) -> Result<ImageChoice, SelectError> {
    let defaults = catalog.default_collection(MediaKind::Image);
    match policy {
        PolicyKind::Font => {
            let ch = event.character().ok_or(SelectError::NoCharacter)?;
            let ch = if uppercase {
                ch.to_uppercase().next().unwrap_or(ch)
            } else {
                ch
            };
            let color = rng.pick(palette).copied().unwrap_or((255, 255, 255));
            Ok(ImageChoice::Glyph(Glyph {
                ch,
                color,
                max_dim: GLYPH_MAX_DIM,
            }))
        }
        PolicyKind::Deterministic => {
            deterministic_pick(defaults, event.code).map(ImageChoice::File)
        }
        PolicyKind::Random => random_pick(defaults, rng).map(ImageChoice::File),
        PolicyKind::NamedFile => {
            named_pick(catalog, MediaKind::Image, args).map(ImageChoice::File)
        }
    }
}

/// `code mod len` into the collection; same code, same item, for the run.
fn deterministic_pick(collection: &Collection, code: u32) -> Result<MediaHandle, SelectError> {
    if collection.is_empty() {
        return Err(empty(collection));
    }
    let index = code as usize % collection.len();
    collection.get(index).cloned().ok_or_else(|| empty(collection))
}

/// An independent uniform draw from the collection.
fn random_pick(collection: &Collection, rng: &mut RandomSource) -> Result<MediaHandle, SelectError> {
    if collection.is_empty() {
        return Err(empty(collection));
    }
    let index = rng.index(collection.len());
    collection.get(index).cloned().ok_or_else(|| empty(collection))
}

/// Exact-name lookup in the active extension's collection.
fn named_pick(
    catalog: &Catalog,
    kind: MediaKind,
    args: &[String],
) -> Result<MediaHandle, SelectError> {
    let Some(collection) = catalog.extension_collection(kind) else {
        return Err(SelectError::ResourceUnavailable {
            collection: format!("extension/{}", kind.label()),
        });
    };
    let name = args.first().map(String::as_str).unwrap_or_default();
    collection
        .by_name(name)
        .cloned()
        .ok_or_else(|| SelectError::ResourceNotFound {
            name: name.to_string(),
            collection: collection.name().to_string(),
        })
}

/// The error for an empty collection.
fn empty(collection: &Collection) -> SelectError {
    SelectError::ResourceUnavailable {
        collection: collection.name().to_string(),
    }
}
