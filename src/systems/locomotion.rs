//! Locomotion and facing systems.
//!
//! - [`locomotion`] re-evaluates each entity's [`Locomotion`] state from its
//!   corrected velocity and ground flag, and on a change makes the bound clip
//!   active, restarted from its first frame.
//! - [`facing`] tracks the sign of horizontal velocity and mirrors every clip
//!   in the entity's [`ClipSet`] together.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::body::Body;
use crate::components::clipset::ClipSet;
use crate::components::facing::Facing;
use crate::components::locomotion::Locomotion;

pub fn locomotion(mut query: Query<(Entity, &mut Locomotion, &mut ClipSet, &Body)>) {
    for (entity, mut loco, mut clips, body) in query.iter_mut() {
        let previous = loco.state;
        if let Some(state) = loco.update(body.velocity.x, body.on_ground) {
            debug!(
                "{:?}: {:?} -> {:?} (vx={:.1}, ground={})",
                entity, previous, state, body.velocity.x, body.on_ground
            );
            clips.activate_state(state);
        }
    }
}

pub fn facing(mut query: Query<(&mut Facing, &mut ClipSet, &Body)>) {
    for (mut facing, mut clips, body) in query.iter_mut() {
        if let Some(next) = Facing::from_velocity(body.velocity.x) {
            if *facing != next {
                *facing = next;
                clips.apply_facing(next);
            }
        }
    }
}
