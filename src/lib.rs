//! genart is a procedural generative-art rendering and compositing engine.
//!
//! A declarative [`RenderParameters`] snapshot is turned into pixels across multiple blended
//! layers, with optional animation, pixel filters, and pointer-driven interaction:
//!
//! - Build or load a [`RenderParameters`]
//! - Mount a [`RenderSession`] on a [`HostContainer`]
//! - Feed it parameter updates, host ticks, and pointer events; read back frames or export them
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod animation;
pub mod effects;
pub mod export;
mod foundation;
pub mod geometry;
pub mod interaction;
pub mod params;
pub mod pattern;
pub mod render;
pub mod session;
pub mod share;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, MAX_CANVAS_DIM, Point, Rgba8, Vec2,
};
pub use crate::foundation::error::{GenartError, GenartResult};
pub use crate::foundation::rng::{ArtRng, derive_seed};

pub use crate::animation::clock::{AnimationClock, ClockState};
pub use crate::export::artwork::{Gallery, ImageFormat, SavedArtwork};
pub use crate::interaction::engine::{
    InteractionEngine, InteractionMode, InteractionParams, PointerEvent, PointerKind,
};
pub use crate::params::kinds::{BlendMode, FilterKind, PatternKind, ShapeKind};
pub use crate::params::model::{
    Background, ColorPalette, LayerId, LayerSettings, RenderParameters,
};
pub use crate::render::surface::FrameRGBA;
pub use crate::session::host::{HeadlessContainer, HostContainer, ListenerHandle, ListenerKind};
pub use crate::session::render_session::{RenderSession, SessionOpts};
pub use crate::share::backend::{ArtworkRecord, MemShareBackend, NewArtwork, ShareBackend};
