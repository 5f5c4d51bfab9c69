use bevy_ecs::prelude::*;
use log::debug;

use crate::components::actor::{Controller, Player};
use crate::components::body::Body;
use crate::resources::playerinput::PlayerInput;

/// Turn [`PlayerInput`] into horizontal velocity and jumps.
///
/// Horizontal velocity is set directly (no acceleration); releasing the keys
/// stops the player. Jumps only start from the ground.
pub fn player_control(
    input: Res<PlayerInput>,
    mut query: Query<(&mut Body, &Controller), With<Player>>,
) {
    for (mut body, controller) in query.iter_mut() {
        let speed = if input.run {
            controller.run_speed
        } else {
            controller.walk_speed
        };
        body.velocity.x = input.axis() * speed;
        if input.jump && body.jump(controller.jump_velocity) {
            debug!("Jump at vy={}", controller.jump_velocity);
        }
    }
}
