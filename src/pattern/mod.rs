//! Layout algorithms that turn a layer's settings into shape placements.

/// The six layout generators.
pub mod generators;

pub use generators::{PatternInput, generate, grid_color_index, grid_dims};
