//! Pointer input, trail history, and per-mode layer overrides.

/// Interaction modes, pointer events, and draw-mode strokes.
pub mod engine;
/// Throttled, bounded pointer trail.
pub mod history;

pub use engine::{
    InteractionEngine, InteractionMode, InteractionParams, PointerEvent, PointerKind, Stroke,
};
pub use history::PointerHistory;
