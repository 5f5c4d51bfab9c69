//! World setup, actor spawning and the per-frame schedule.
//!
//! # Frame order
//!
//! 1. [`player_control`] – input intent into velocity
//! 2. [`integrate`] – gravity, velocity → position, ground flag cleared
//! 3. [`resolve_collisions`] – push out of each platform in level order
//! 4. [`confine_to_level`] – horizontal world bounds
//! 5. [`locomotion`] – state from corrected velocity/ground, clip switch
//! 6. [`facing`] – mirror all clips on direction change
//! 7. [`animate`] – sync clip positions, advance the active clip

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::Vector2;

use crate::components::actor::{Enemy, Player};
use crate::components::body::Body;
use crate::components::boxcollider::BoxCollider;
use crate::components::facing::Facing;
use crate::components::locomotion::Locomotion;
use crate::components::mapposition::MapPosition;
use crate::resources::atlasstore::{AtlasError, AtlasLoader, AtlasStore};
use crate::resources::gameconfig::GameConfig;
use crate::resources::level::Level;
use crate::resources::playerinput::PlayerInput;
use crate::resources::profile::ActorProfile;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animate;
use crate::systems::collision::{confine_to_level, resolve_collisions};
use crate::systems::control::player_control;
use crate::systems::locomotion::{facing, locomotion};
use crate::systems::movement::integrate;

/// Insert every resource the frame schedule reads.
pub fn insert_resources(world: &mut World, config: GameConfig, level: Level) {
    world.insert_resource(WorldTime::default());
    world.insert_resource(AtlasStore::new());
    world.insert_resource(PlayerInput::default());
    world.insert_resource(level);
    world.insert_resource(config);
}

pub fn frame_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            player_control,
            integrate,
            resolve_collisions,
            confine_to_level,
            locomotion,
            facing,
            animate,
        )
            .chain(),
    );
    schedule
}

/// Spawn an actor built from `profile` at `position`.
///
/// Profiles with a controller become the player; the rest are enemies. Clips
/// that fail to load are reported but do not prevent the spawn.
pub fn spawn_actor(
    world: &mut World,
    profile: &ActorProfile,
    position: Vector2,
    loader: &mut dyn AtlasLoader,
) -> (Entity, Vec<AtlasError>) {
    let (mut clips, failures) = {
        let mut atlases = world.resource_mut::<AtlasStore>();
        profile.load_clips(&mut atlases, loader)
    };
    let facing = Facing::default();
    clips.apply_facing(facing);
    clips.sync_position(position);

    let (width, height) = profile.hitbox_size();
    let mut entity = world.spawn((
        MapPosition { pos: position },
        Body::new(profile.gravity),
        BoxCollider::centered(width, height),
        clips,
        Locomotion::new(profile.tuning),
        facing,
    ));
    match profile.controller {
        Some(controller) => {
            entity.insert((Player, controller));
        }
        None => {
            entity.insert(Enemy {
                kind: profile.name.clone(),
            });
        }
    }
    let id = entity.id();
    info!(
        "Spawned {} {:?} at ({:.0}, {:.0}), {} clip(s) failed",
        profile.name,
        id,
        position.x,
        position.y,
        failures.len()
    );
    (id, failures)
}
