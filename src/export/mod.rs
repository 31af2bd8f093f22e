//! Image encoders and the local gallery of saved artworks.

/// Saved artworks and the bounded gallery.
pub mod artwork;
/// PNG encoding and base64 data URLs.
pub mod png;
/// Vector export of a frame plan.
pub mod svg;

pub use artwork::{GALLERY_CAPACITY, Gallery, ImageFormat, SavedArtwork};
pub use png::{PNG_MIME, encode_png};
pub use svg::{SVG_MIME, svg_document};
