//! Frame clock driving animated renders.

/// Idle/running frame clock and the animation offset.
pub mod clock;

pub use clock::{AnimationClock, ClockState};
