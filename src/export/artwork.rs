use std::collections::VecDeque;

use crate::foundation::error::GenartResult;
use crate::params::model::RenderParameters;

/// Number of artworks a [`Gallery`] keeps.
pub const GALLERY_CAPACITY: usize = 6;

/// Payload encoding of a saved artwork.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Raster, `data:image/png;base64,...`.
    #[default]
    Png,
    /// Vector, `data:image/svg+xml;base64,...`.
    Svg,
}

impl ImageFormat {
    /// Lowercase id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        self.id()
    }

    /// Format for a path by extension, case-insensitive.
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }
}

/// An exported image together with the parameters that produced it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedArtwork {
    /// Data URL of the encoded image.
    pub image: String,
    /// Snapshot that rendered `image`.
    pub settings: RenderParameters,
    /// Milliseconds since the Unix epoch.
    pub created_at_ms: u64,
    /// Encoding of `image`.
    pub format: ImageFormat,
}

/// Most-recent-first list of saved artworks with a fixed capacity.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Gallery {
    items: VecDeque<SavedArtwork>,
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Gallery {
    /// Empty gallery.
    pub fn new() -> Self {
        Self {
            items: VecDeque::with_capacity(GALLERY_CAPACITY),
        }
    }

    /// Add `art` at the front, evicting the oldest entry when full. Returns the evicted entry.
    pub fn save(&mut self, art: SavedArtwork) -> Option<SavedArtwork> {
        self.items.push_front(art);
        if self.items.len() > GALLERY_CAPACITY {
            self.items.pop_back()
        } else {
            None
        }
    }

    /// Remove the entry at `index` (0 is the newest).
    pub fn remove(&mut self, index: usize) -> Option<SavedArtwork> {
        self.items.remove(index)
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&SavedArtwork> {
        self.items.get(index)
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &SavedArtwork> {
        self.items.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the gallery is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> GenartResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse JSON produced by [`Gallery::to_json`]. Entries beyond capacity are dropped.
    pub fn from_json(s: &str) -> GenartResult<Self> {
        let mut gallery: Self = serde_json::from_str(s)?;
        gallery.items.truncate(GALLERY_CAPACITY);
        Ok(gallery)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/artwork.rs"]
mod tests;
