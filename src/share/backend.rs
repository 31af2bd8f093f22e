use std::collections::BTreeMap;

use crate::foundation::error::{GenartError, GenartResult};
use crate::params::model::RenderParameters;

/// Payload posted to a share backend.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArtwork {
    /// Data URL of the image.
    pub image_url: String,
    /// Parameters that produced the image.
    pub settings: RenderParameters,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

/// A stored shared artwork.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRecord {
    /// Backend-assigned id.
    pub id: u64,
    /// Data URL of the image.
    pub image_url: String,
    /// Parameters that produced the image.
    pub settings: RenderParameters,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
}

/// Store for shared artworks, addressed by integer id.
pub trait ShareBackend {
    /// Store `art` and return its new id.
    fn create(&mut self, art: NewArtwork) -> GenartResult<u64>;

    /// Record for `id`, or `None` if there is none.
    fn get(&self, id: u64) -> GenartResult<Option<ArtworkRecord>>;

    /// All records in id order.
    fn list(&self) -> GenartResult<Vec<ArtworkRecord>>;

    /// Remove `id`. Returns whether a record existed.
    fn delete(&mut self, id: u64) -> GenartResult<bool>;
}

/// Process-local backend. Ids start at 1 and are never reused.
#[derive(Clone, Debug)]
pub struct MemShareBackend {
    next_id: u64,
    records: BTreeMap<u64, ArtworkRecord>,
}

impl Default for MemShareBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemShareBackend {
    /// Empty backend.
    pub fn new() -> Self {
        Self {
            next_id: 1,
            records: BTreeMap::new(),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ShareBackend for MemShareBackend {
    fn create(&mut self, art: NewArtwork) -> GenartResult<u64> {
        if art.image_url.is_empty() {
            return Err(GenartError::validation("shared artwork requires an image"));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.records.insert(
            id,
            ArtworkRecord {
                id,
                image_url: art.image_url,
                settings: art.settings,
                created_at: art.created_at,
            },
        );
        tracing::debug!(id, "artwork shared");
        Ok(id)
    }

    fn get(&self, id: u64) -> GenartResult<Option<ArtworkRecord>> {
        Ok(self.records.get(&id).cloned())
    }

    fn list(&self) -> GenartResult<Vec<ArtworkRecord>> {
        Ok(self.records.values().cloned().collect())
    }

    fn delete(&mut self, id: u64) -> GenartResult<bool> {
        Ok(self.records.remove(&id).is_some())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/share/backend.rs"]
mod tests;
