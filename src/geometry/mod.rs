//! Shape primitives as immutable draw commands.

/// Draw commands and primitive outlines.
pub mod shapes;

pub use shapes::{DrawCmd, ShapeCmd, place_shape, polyline_path, shape_path};
