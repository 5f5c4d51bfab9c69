//! Per-frame movement intent for the player.
//!
//! Filled by the binary from the keyboard before the frame schedule runs, so
//! the simulation never talks to the input device itself.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    /// Run modifier held.
    pub run: bool,
    /// Jump pressed this frame.
    pub jump: bool,
}

impl PlayerInput {
    /// -1, 0 or 1. Opposite directions cancel out.
    pub fn axis(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}
