use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Axis-aligned hitbox of a dynamic entity, relative to its [`MapPosition`].
///
/// [`MapPosition`]: super::mapposition::MapPosition
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
    /// Offset of the box's top-left corner from the entity position.
    pub offset: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size and its top-left at the entity position.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
            offset: Vector2::zero(),
        }
    }

    /// Create a BoxCollider centred on the entity position.
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vector2::new(-width * 0.5, -height * 0.5))
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vector2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vector2) -> (Vector2, Vector2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        let min = Vector2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vector2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// World-space rectangle of the collider at `position`.
    pub fn rect(&self, position: Vector2) -> Rectangle {
        let (min, max) = self.aabb(position);
        Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_surrounds_position() {
        let collider = BoxCollider::centered(36.0, 36.0);
        let r = collider.rect(Vector2::new(100.0, 200.0));
        assert_eq!((r.x, r.y, r.width, r.height), (82.0, 182.0, 36.0, 36.0));
    }

    #[test]
    fn test_negative_size_is_normalized() {
        let collider = BoxCollider::new(-10.0, 4.0);
        let (min, max) = collider.aabb(Vector2::new(0.0, 0.0));
        assert_eq!((min.x, max.x), (-10.0, 0.0));
        assert_eq!((min.y, max.y), (0.0, 4.0));
    }
}
