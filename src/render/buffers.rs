use std::collections::{BTreeSet, HashMap};

use crate::foundation::core::Canvas;
use crate::params::model::{LayerId, LayerSettings};
use crate::render::surface::Surface;

/// Allocation counters, observable for leak checks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BufferStats {
    /// Buffers currently held.
    pub live: usize,
    /// Buffers allocated over the manager's lifetime.
    pub allocated: u64,
    /// Buffers released over the manager's lifetime.
    pub released: u64,
}

/// Owns one offscreen [`Surface`] per layer id, sized to the main canvas.
///
/// Buffers are never resized: a canvas change or an unseen id reallocates the whole set.
#[derive(Debug, Default)]
pub struct LayerBufferManager {
    canvas: Option<Canvas>,
    buffers: HashMap<LayerId, Surface>,
    stats: BufferStats,
}

impl LayerBufferManager {
    /// Empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard every buffer and allocate one per layer in `layers`.
    pub fn create_buffers(&mut self, layers: &[LayerSettings], canvas: Canvas) {
        self.release_all();
        for layer in layers {
            if !self.buffers.contains_key(&layer.id) {
                self.buffers.insert(layer.id.clone(), Surface::new(canvas));
                self.stats.allocated += 1;
            }
        }
        self.canvas = Some(canvas);
        self.stats.live = self.buffers.len();
        tracing::debug!(
            buffers = self.buffers.len(),
            width = canvas.width,
            height = canvas.height,
            "layer buffers allocated"
        );
    }

    /// Bring the buffer set in line with `layers`.
    ///
    /// Returns `true` when buffers were reallocated. Ids that disappeared are released right
    /// away; a new id or a canvas change recreates everything.
    pub fn sync(&mut self, layers: &[LayerSettings], canvas: Canvas) -> bool {
        let wanted: BTreeSet<&LayerId> = layers.iter().map(|l| &l.id).collect();
        let has_new = wanted.iter().any(|id| !self.buffers.contains_key(*id));
        if self.canvas != Some(canvas) || has_new {
            self.create_buffers(layers, canvas);
            return true;
        }

        let before = self.buffers.len();
        self.buffers.retain(|id, _| wanted.contains(id));
        let dropped = before - self.buffers.len();
        if dropped > 0 {
            self.stats.released += dropped as u64;
            self.stats.live = self.buffers.len();
            tracing::debug!(dropped, "released buffers of removed layers");
        }
        false
    }

    /// Buffer for `id`, or `None` when it has not been allocated.
    pub fn get_buffer(&self, id: &LayerId) -> Option<&Surface> {
        self.buffers.get(id)
    }

    /// Mutable buffer for `id`, or `None` when it has not been allocated.
    pub fn get_buffer_mut(&mut self, id: &LayerId) -> Option<&mut Surface> {
        self.buffers.get_mut(id)
    }

    /// Ids that currently own a buffer.
    pub fn ids(&self) -> BTreeSet<LayerId> {
        self.buffers.keys().cloned().collect()
    }

    /// Canvas the buffers were allocated for.
    pub fn canvas(&self) -> Option<Canvas> {
        self.canvas
    }

    /// Allocation counters.
    pub fn stats(&self) -> BufferStats {
        self.stats
    }

    /// Release every buffer.
    pub fn release_all(&mut self) {
        self.stats.released += self.buffers.len() as u64;
        self.buffers.clear();
        self.stats.live = 0;
        self.canvas = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/buffers.rs"]
mod tests;
