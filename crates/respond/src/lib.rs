//! The event-to-media selection engine.
//!
//! For each input event the engine asks the sound and image mappers which
//! policy applies, resolves that policy against the resource catalog, and
//! returns a sound handle and/or an image choice. The two channels are
//! independent: a failure on one is suppressed to `None` and logged, never
//! propagated, and never silences the other channel.

mod engine;
mod error;
mod mapper;
mod policy;
mod rng;
mod swap;

pub use engine::{Responder, Response};
pub use error::SelectError;
pub use mapper::{Mapper, ModeFlags, Request, build_mappers};
pub use policy::{DEFAULT_PALETTE, GLYPH_MAX_DIM, Glyph, ImageChoice, Rgb};
pub use rng::RandomSource;
pub use swap::KeypressTrigger;
