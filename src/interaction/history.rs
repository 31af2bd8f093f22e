use std::collections::VecDeque;

use kurbo::Point;

/// Default number of remembered pointer samples.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;
/// Default minimum spacing between samples, in milliseconds.
pub const DEFAULT_THROTTLE_MS: f64 = 30.0;

/// Bounded, time-throttled pointer trail, newest first.
#[derive(Clone, Debug)]
pub struct PointerHistory {
    capacity: usize,
    throttle_ms: f64,
    samples: VecDeque<Point>,
    last_sample_ms: Option<f64>,
}

impl Default for PointerHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY, DEFAULT_THROTTLE_MS)
    }
}

impl PointerHistory {
    /// Empty history keeping at most `capacity` samples (minimum 1).
    pub fn new(capacity: usize, throttle_ms: f64) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            throttle_ms,
            samples: VecDeque::with_capacity(capacity),
            last_sample_ms: None,
        }
    }

    /// Push unconditionally, without touching the throttle clock.
    pub fn seed(&mut self, p: Point) {
        self.push_front(p);
    }

    /// Push `p` if more than the throttle interval has passed since the last accepted sample.
    pub fn record(&mut self, p: Point, now_ms: f64) -> bool {
        if let Some(last) = self.last_sample_ms
            && now_ms - last <= self.throttle_ms
        {
            return false;
        }
        self.push_front(p);
        self.last_sample_ms = Some(now_ms);
        true
    }

    fn push_front(&mut self, p: Point) {
        self.samples.push_front(p);
        self.samples.truncate(self.capacity);
    }

    /// Sample `i` steps back (0 = newest).
    pub fn get(&self, i: usize) -> Option<Point> {
        self.samples.get(i).copied()
    }

    /// Samples, newest first.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.samples.iter().copied()
    }

    /// Number of samples held.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are held.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Maximum samples held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Forget everything, including the throttle clock.
    pub fn clear(&mut self) {
        self.samples.clear();
        self.last_sample_ms = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/history.rs"]
mod tests;
