//! Frame delta-time source.

use std::time::{Duration, Instant};

/// Supplies the per-frame delta time consumed by camera movement.
///
/// A wall clock measures real elapsed time between ticks; a fixed clock
/// returns the same step every tick, which keeps headless runs reproducible.
#[derive(Debug, Clone)]
pub struct FrameClock {
    mode: ClockMode,
    frames: u64,
}

#[derive(Debug, Clone)]
enum ClockMode {
    Wall { last_tick: Instant },
    Fixed { step: f32 },
}

impl FrameClock {
    /// Create a wall clock starting from now.
    pub fn new() -> Self {
        Self {
            mode: ClockMode::Wall {
                last_tick: Instant::now(),
            },
            frames: 0,
        }
    }

    /// Create a clock that always reports `step` seconds.
    ///
    /// Negative steps are treated as zero.
    pub fn fixed(step: f32) -> Self {
        Self {
            mode: ClockMode::Fixed {
                step: step.max(0.0),
            },
            frames: 0,
        }
    }

    /// Advance one frame and return the elapsed time in seconds.
    pub fn tick(&mut self) -> f32 {
        self.frames += 1;
        match &mut self.mode {
            ClockMode::Wall { last_tick } => {
                let now = Instant::now();
                let delta: Duration = now.saturating_duration_since(*last_tick);
                *last_tick = now;
                delta.as_secs_f32()
            }
            ClockMode::Fixed { step } => *step,
        }
    }

    /// Number of ticks taken so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
