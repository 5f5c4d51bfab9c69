use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Horizontal speed that must be exceeded before facing changes.
pub const FACING_DEADZONE: f32 = 0.1;

/// Which way an entity's sprites point.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// Facing implied by `velocity_x`, or `None` inside the deadzone.
    pub fn from_velocity(velocity_x: f32) -> Option<Facing> {
        if velocity_x > FACING_DEADZONE {
            Some(Facing::Right)
        } else if velocity_x < -FACING_DEADZONE {
            Some(Facing::Left)
        } else {
            None
        }
    }

    /// Sign applied to the horizontal scale of every clip.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone_keeps_facing() {
        assert_eq!(Facing::from_velocity(0.05), None);
        assert_eq!(Facing::from_velocity(-0.1), None);
        assert_eq!(Facing::from_velocity(0.2), Some(Facing::Right));
        assert_eq!(Facing::from_velocity(-3.0), Some(Facing::Left));
    }
}
