//! Post-processing over the composited frame.

/// Separable Gaussian blur over premultiplied RGBA8.
pub mod blur;
/// Post-processing filters selected by [`crate::FilterKind`].
pub mod filters;

pub use filters::apply_filter;
