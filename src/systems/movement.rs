use bevy_ecs::prelude::*;

use crate::components::body::Body;
use crate::components::mapposition::MapPosition;
use crate::resources::worldtime::WorldTime;

/// Integrate gravity and velocity into position, then clear the ground flag.
///
/// Gravity is skipped for bodies that ended the previous step grounded. After
/// this system only the collision resolver may set `on_ground` again.
pub fn integrate(mut query: Query<(&mut MapPosition, &mut Body)>, time: Res<WorldTime>) {
    for (mut position, mut body) in query.iter_mut() {
        let step = body.integrate(time.delta);
        position.pos += step;
        body.on_ground = false;
    }
}
