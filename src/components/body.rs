//! Kinematic body shared by every movable, collidable entity.
//!
//! [`Body`] carries the velocity, the constant downward acceleration and the
//! per-step ground flag. Together with [`MapPosition`] and [`BoxCollider`] it
//! forms the capability record that both players and enemies compose; what
//! differs between them is data (profiles), not type.
//!
//! The ground flag is owned by the step: integration clears it and only the
//! collision resolver may set it again during the same step.
//!
//! [`MapPosition`]: super::mapposition::MapPosition
//! [`BoxCollider`]: super::boxcollider::BoxCollider

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Default gravity in pixels per second squared.
pub const DEFAULT_GRAVITY: f32 = 980.0;

#[derive(Component, Clone, Copy, Debug)]
pub struct Body {
    /// Current velocity in pixels per second.
    pub velocity: Vector2,
    /// Downward acceleration applied while airborne.
    pub gravity: f32,
    /// True when a collider supported this body during the last step.
    pub on_ground: bool,
}

impl Default for Body {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY)
    }
}

impl Body {
    /// Create a body at rest, airborne.
    pub fn new(gravity: f32) -> Self {
        Self {
            velocity: Vector2::zero(),
            gravity,
            on_ground: false,
        }
    }

    pub fn with_velocity(mut self, velocity: Vector2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Apply one semi-implicit Euler step and return the displacement.
    ///
    /// Gravity is only added while the body is airborne. Velocity is updated
    /// before it is used for the displacement.
    pub fn integrate(&mut self, delta: f32) -> Vector2 {
        if !self.on_ground {
            self.velocity.y += self.gravity * delta;
        }
        Vector2::new(self.velocity.x * delta, self.velocity.y * delta)
    }

    /// Launch upwards with `velocity` (negative is up) if standing on ground.
    /// Returns false when airborne.
    pub fn jump(&mut self, velocity: f32) -> bool {
        if !self.on_ground {
            return false;
        }
        self.velocity.y = velocity;
        self.on_ground = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_body_new_is_airborne_at_rest() {
        let body = Body::new(500.0);
        assert!(approx_eq(body.velocity.x, 0.0));
        assert!(approx_eq(body.velocity.y, 0.0));
        assert!(approx_eq(body.gravity, 500.0));
        assert!(!body.on_ground);
    }

    #[test]
    fn test_integrate_applies_gravity_before_displacement() {
        let mut body = Body::new(1000.0);
        let step = body.integrate(0.1);
        assert!(approx_eq(body.velocity.y, 100.0));
        assert!(approx_eq(step.y, 10.0));
    }

    #[test]
    fn test_integrate_on_ground_skips_gravity() {
        let mut body = Body::new(1000.0).with_velocity(Vector2::new(50.0, 0.0));
        body.on_ground = true;
        let step = body.integrate(0.5);
        assert!(approx_eq(body.velocity.y, 0.0));
        assert!(approx_eq(step.x, 25.0));
        assert!(approx_eq(step.y, 0.0));
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut body = Body::default();
        assert!(!body.jump(-400.0));
        assert!(approx_eq(body.velocity.y, 0.0));

        body.on_ground = true;
        assert!(body.jump(-400.0));
        assert!(approx_eq(body.velocity.y, -400.0));
        assert!(!body.on_ground);
    }
}
