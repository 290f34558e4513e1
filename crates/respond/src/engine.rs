//! The selection engine: one event in, at most one sound and one image out.

use event::InputEvent;
use eventmap::EventMap;
use media::{Catalog, MediaHandle};
use tracing::warn;

use crate::{
    mapper::{Mapper, ModeFlags, build_mappers},
    policy::{self, DEFAULT_PALETTE, ImageChoice, Rgb},
    rng::RandomSource,
};

/// What the engine selected for one event. Either channel may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Response {
    /// The sound to play, if one resolved.
    pub sound: Option<MediaHandle>,
    /// The image to show, if one resolved.
    pub image: Option<ImageChoice>,
}

impl Response {
    /// Whether neither channel produced anything.
    pub fn is_empty(&self) -> bool {
        self.sound.is_none() && self.image.is_none()
    }
}

/// The per-run selection engine.
///
/// Holds the immutable catalog, both mappers, the glyph palette, and the
/// run's single random source. Selection is synchronous and does no I/O.
#[derive(Debug)]
pub struct Responder {
    sound_mapper: Mapper,
    image_mapper: Mapper,
    catalog: Catalog,
    palette: Vec<Rgb>,
    uppercase: bool,
    rng: RandomSource,
}

impl Responder {
    /// Build the engine from a loaded catalog, an optional extension rule
    /// document, the run-mode flags, and the run's random source.
    pub fn new(
        catalog: Catalog,
        event_map: Option<EventMap>,
        flags: ModeFlags,
        rng: RandomSource,
    ) -> Self {
        let (sound_mapper, image_mapper) = build_mappers(event_map, &flags);
        Self {
            sound_mapper,
            image_mapper,
            catalog,
            palette: DEFAULT_PALETTE.to_vec(),
            uppercase: flags.uppercase,
            rng,
        }
    }

    /// Replace the glyph color palette; an empty palette is ignored.
    pub fn set_palette(&mut self, palette: Vec<Rgb>) {
        if !palette.is_empty() {
            self.palette = palette;
        }
    }

    /// Borrow the run's random source, e.g. for keypress triggers.
    pub fn rng_mut(&mut self) -> &mut RandomSource {
        &mut self.rng
    }

    /// Resolve both channels for `event`.
    ///
    /// Each channel is mapped and selected independently; a selection failure
    /// is suppressed to `None` for that channel only and logged as a warning.
    /// Events that do not feed selection yield an empty response.
    pub fn respond(&mut self, event: &InputEvent) -> Response {
        if !event.selects_media() {
            return Response::default();
        }

        let sound = {
            let req = self.sound_mapper.map(event);
            match policy::select_sound(req.policy, &req.args, event, &self.catalog, &mut self.rng)
            {
                Ok(handle) => Some(handle),
                Err(e) => {
                    warn!(policy = %req.policy, error = %e, "sound selection failed");
                    None
                }
            }
        };

        let image = {
            let req = self.image_mapper.map(event);
            match policy::select_image(
                req.policy,
                &req.args,
                event,
                &self.catalog,
                &self.palette,
                self.uppercase,
                &mut self.rng,
            ) {
                Ok(choice) => Some(choice),
                Err(e) => {
                    warn!(policy = %req.policy, error = %e, "image selection failed");
                    None
                }
            }
        };

        Response { sound, image }
    }
}
