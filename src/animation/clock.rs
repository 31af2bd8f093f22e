/// Clock state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockState {
    /// No redraws except on explicit parameter updates.
    #[default]
    Idle,
    /// One frame per host tick.
    Running,
}

/// Frame counter that turns host ticks into an animation offset.
///
/// The offset is `frame_count * speed / 100`. The frame count survives stop/start so a
/// resumed animation continues from where it paused.
#[derive(Clone, Debug, Default)]
pub struct AnimationClock {
    state: ClockState,
    frame_count: u64,
    speed: f64,
}

impl AnimationClock {
    /// Idle clock at frame 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow the animated flag. Returns the new state when it changed.
    pub fn set_animated(&mut self, animated: bool, speed: f64) -> Option<ClockState> {
        self.speed = if speed.is_finite() { speed.max(0.0) } else { 0.0 };
        let next = if animated {
            ClockState::Running
        } else {
            ClockState::Idle
        };
        if next == self.state {
            return None;
        }
        self.state = next;
        tracing::debug!(state = ?next, frame = self.frame_count, "animation clock");
        Some(next)
    }

    /// Advance one frame if running; returns the new offset.
    pub fn tick(&mut self) -> Option<f64> {
        match self.state {
            ClockState::Idle => None,
            ClockState::Running => {
                self.frame_count += 1;
                Some(self.offset())
            }
        }
    }

    /// Force the clock idle.
    pub fn stop(&mut self) {
        if self.state == ClockState::Running {
            tracing::debug!(frame = self.frame_count, "animation clock stopped");
        }
        self.state = ClockState::Idle;
    }

    /// Current offset. Zero while idle so static renders are stable.
    pub fn offset(&self) -> f64 {
        match self.state {
            ClockState::Idle => 0.0,
            ClockState::Running => self.frame_count as f64 * self.speed / 100.0,
        }
    }

    /// Frames advanced so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current state.
    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Whether ticks produce frames.
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
