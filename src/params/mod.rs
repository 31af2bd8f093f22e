//! Parameter snapshots and the operations that derive new ones.

/// Copy-on-write layer list editing.
pub mod edit;
/// Closed id enums for shapes, patterns, filters, and blend modes.
pub mod kinds;
/// Parameter snapshot model and validation.
pub mod model;
/// Default palettes, built-in presets, and art themes.
pub mod presets;

pub use kinds::{BlendMode, FilterKind, PatternKind, ShapeKind};
pub use model::{Background, ColorPalette, LayerId, LayerSettings, RenderParameters};
