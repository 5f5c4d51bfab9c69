//! Marker and tuning components that distinguish actor kinds.
//!
//! Players and enemies share the same capability components; these markers
//! only select which systems drive them.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Entity driven by [`crate::resources::playerinput::PlayerInput`].
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;

/// Non-player actor.
#[derive(Component, Debug, Clone, Default)]
pub struct Enemy {
    /// Profile name, e.g. `"dragon"`.
    pub kind: String,
}

/// Jump and horizontal speeds of an input-driven actor, in pixels per second.
#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Vertical launch velocity; negative is up.
    pub jump_velocity: f32,
}

impl Default for Controller {
    fn default() -> Self {
        Self {
            walk_speed: 150.0,
            run_speed: 300.0,
            jump_velocity: -400.0,
        }
    }
}
