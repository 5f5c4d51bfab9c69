//! Locomotion state machine.
//!
//! Picks which movement state an entity is in from its horizontal speed and
//! ground contact. Rules are evaluated in priority order and the first match
//! wins:
//!
//! 1. not on ground → [`LocomotionState::Jump`]
//! 2. `|vx| > run_threshold` → [`LocomotionState::Run`]
//! 3. `|vx| > walk_threshold` → [`LocomotionState::Walk`]
//! 4. otherwise → [`LocomotionState::Idle`]
//!
//! The clip switch that follows a transition is done by
//! [`crate::systems::locomotion::locomotion`].

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WALK_THRESHOLD: f32 = 10.0;
pub const DEFAULT_RUN_THRESHOLD: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocomotionState {
    #[default]
    Idle,
    Walk,
    Run,
    Jump,
}

impl LocomotionState {
    pub const ALL: [LocomotionState; 4] = [
        LocomotionState::Idle,
        LocomotionState::Walk,
        LocomotionState::Run,
        LocomotionState::Jump,
    ];

    /// Clip key used when no explicit binding exists.
    pub fn default_clip_key(self) -> &'static str {
        match self {
            LocomotionState::Idle => "idle",
            LocomotionState::Walk => "walk",
            LocomotionState::Run => "run",
            LocomotionState::Jump => "jump",
        }
    }
}

/// Speed thresholds in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocomotionTuning {
    pub walk_threshold: f32,
    pub run_threshold: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            walk_threshold: DEFAULT_WALK_THRESHOLD,
            run_threshold: DEFAULT_RUN_THRESHOLD,
        }
    }
}

/// Compute the state for the given velocity and ground contact.
pub fn next_state(velocity_x: f32, on_ground: bool, tuning: &LocomotionTuning) -> LocomotionState {
    let speed = velocity_x.abs();
    if !on_ground {
        LocomotionState::Jump
    } else if speed > tuning.run_threshold {
        LocomotionState::Run
    } else if speed > tuning.walk_threshold {
        LocomotionState::Walk
    } else {
        LocomotionState::Idle
    }
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Locomotion {
    pub state: LocomotionState,
    pub tuning: LocomotionTuning,
}

impl Locomotion {
    pub fn new(tuning: LocomotionTuning) -> Self {
        Self {
            state: LocomotionState::Idle,
            tuning,
        }
    }

    /// Re-evaluate the state. Returns the new state only when it changed.
    pub fn update(&mut self, velocity_x: f32, on_ground: bool) -> Option<LocomotionState> {
        let next = next_state(velocity_x, on_ground, &self.tuning);
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}
