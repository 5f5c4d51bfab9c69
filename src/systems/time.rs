use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Advance the [`WorldTime`] resource by one frame.
///
/// Called by the main loop before the frame schedule runs, with the raw
/// frame time reported by raylib.
pub fn update_world_time(world: &mut World, dt: f32) {
    world.resource_mut::<WorldTime>().tick(dt);
}
