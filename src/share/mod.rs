//! Share backend interface and an in-memory implementation.

/// Share backend trait and in-memory store.
pub mod backend;

pub use backend::{ArtworkRecord, MemShareBackend, NewArtwork, ShareBackend};
