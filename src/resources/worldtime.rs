//! Simulation clock shared by the movement and animation systems.

use bevy_ecs::prelude::Resource;

/// Longest step the simulation will take, in seconds. Longer frames (window
/// drags, breakpoints) are cut down so bodies cannot tunnel through platforms.
pub const MAX_STEP: f32 = 0.05;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    /// Scaled seconds since start.
    pub elapsed: f32,
    /// Scaled, clamped length of the current step.
    pub delta: f32,
    pub time_scale: f32,
    /// Upper bound applied to `delta`.
    pub max_step: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            max_step: MAX_STEP,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }

    /// Start a new step from an unscaled wall-clock delta.
    ///
    /// Negative or NaN deltas become a zero-length step.
    pub fn tick(&mut self, dt: f32) {
        let scaled = dt * self.time_scale;
        self.delta = if scaled > 0.0 {
            scaled.min(self.max_step)
        } else {
            0.0
        };
        self.elapsed += self.delta;
        self.frame_count += 1;
    }
}
