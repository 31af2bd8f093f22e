use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::foundation::math::Fnv1a64;

/// Seeded random source used by every procedural decision in a frame.
///
/// Sessions reseed a fresh `ArtRng` per layer per frame, so a static configuration renders
/// identically and animated frames keep their layout while the animation offset moves.
#[derive(Clone, Debug)]
pub struct ArtRng(StdRng);

impl ArtRng {
    /// Deterministic generator for `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Uniform sample in `[lo, hi)`; returns `lo` for an empty range.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        if !(hi > lo) {
            return lo;
        }
        self.0.gen_range(lo..hi)
    }

    /// Uniform sample in `[0, max)`.
    pub fn below(&mut self, max: f64) -> f64 {
        self.range(0.0, max)
    }

    /// Uniform angle in `[0, 2π)`.
    pub fn angle(&mut self) -> f64 {
        self.below(std::f64::consts::TAU)
    }

    /// Uniform index in `[0, len)`; `0` when `len == 0`.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.0.gen_range(0..len)
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        if p <= 0.0 {
            return false;
        }
        self.0.r#gen::<f64>() < p
    }

    /// Fresh unseeded value used to start a new artwork variation.
    pub fn entropy_seed() -> u64 {
        rand::random::<u64>()
    }
}

/// Mix a base seed with a stable key (layer id, purpose tag).
pub fn derive_seed(base: u64, key: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(base);
    h.write_bytes(key.as_bytes());
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
