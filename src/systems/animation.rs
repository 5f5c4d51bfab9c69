//! Animation playback system.
//!
//! Keeps every clip of an entity at its authoritative position and advances
//! only the active clip by the step's delta. Runs after [`locomotion`] so a
//! clip activated this step starts counting from its first frame.
//!
//! [`locomotion`]: crate::systems::locomotion::locomotion

use bevy_ecs::prelude::*;

use crate::components::clipset::ClipSet;
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

pub fn animate(mut query: Query<(&MapPosition, &mut ClipSet)>, time: Res<WorldTime>) {
    for (position, mut clips) in query.iter_mut() {
        clips.sync_position(position.pos);
        clips.advance(time.delta);
    }
}
