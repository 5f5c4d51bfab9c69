//! Static collision resolution.
//!
//! Dynamic bodies are pushed out of static platforms one platform at a time,
//! in level order. Each correction is independent: a body overlapping two
//! platforms is corrected against the first, its bounds are recomputed and
//! then it is tested against the second.
//!
//! # Axis selection
//!
//! The overlap rectangle decides the axis. A narrow, tall overlap means the
//! body struck a side; anything else is treated as top/bottom contact. The
//! comparison is a strict `width < height`, so an exactly square overlap
//! resolves vertically.
//!
//! # Landing skin
//!
//! A landing leaves [`GROUND_SKIN`] units of overlap so the next step still
//! intersects the platform and reports ground. Touching edges count as
//! contact, with a zero-sized overlap.

use bevy_ecs::prelude::*;
use log::trace;
use raylib::prelude::{Rectangle, Vector2};

use crate::components::body::Body;
use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::resources::level::Level;

/// Overlap retained after landing on a platform.
pub const GROUND_SKIN: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactAxis {
    Horizontal,
    Vertical,
}

/// Correction applied by [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Struck a side; pushed out along x.
    Side,
    /// Came down on the top face; now grounded.
    Landing,
    /// Hit the underside; pushed down.
    Ceiling,
}

/// Intersection of two rectangles, `None` when they are apart.
pub fn intersection(a: &Rectangle, b: &Rectangle) -> Option<Rectangle> {
    let left = a.x.max(b.x);
    let top = a.y.max(b.y);
    let right = (a.x + a.width).min(b.x + b.width);
    let bottom = (a.y + a.height).min(b.y + b.height);
    if left > right || top > bottom {
        return None;
    }
    Some(Rectangle::new(left, top, right - left, bottom - top))
}

pub fn classify(overlap: &Rectangle) -> ContactAxis {
    if overlap.width < overlap.height {
        ContactAxis::Horizontal
    } else {
        ContactAxis::Vertical
    }
}

/// Push a body whose hitbox is `bounds` out of `platform`.
///
/// Writes the corrected position and velocity back and sets `on_ground` on a
/// landing. Never clears `on_ground`. Returns `None` when nothing touched.
pub fn resolve(
    bounds: Rectangle,
    velocity: &mut Vector2,
    position: &mut Vector2,
    on_ground: &mut bool,
    platform: Rectangle,
) -> Option<Contact> {
    let overlap = intersection(&bounds, &platform)?;

    match classify(&overlap) {
        ContactAxis::Horizontal => {
            if bounds.x < platform.x {
                position.x -= overlap.width;
            } else {
                position.x += overlap.width;
            }
            velocity.x = 0.0;
            Some(Contact::Side)
        }
        ContactAxis::Vertical => {
            if bounds.y < platform.y {
                position.y -= overlap.height - GROUND_SKIN;
                velocity.y = 0.0;
                *on_ground = true;
                Some(Contact::Landing)
            } else {
                position.y += overlap.height;
                velocity.y = 0.0;
                Some(Contact::Ceiling)
            }
        }
    }
}

/// Resolve every collidable body against every platform, in level order.
pub fn resolve_collisions(
    mut query: Query<(Entity, &mut MapPosition, &mut Body, &BoxCollider)>,
    level: Res<Level>,
) {
    for (entity, mut position, mut body, collider) in query.iter_mut() {
        let Body {
            velocity,
            on_ground,
            ..
        } = &mut *body;
        for platform in level.platforms() {
            let bounds = collider.rect(position.pos);
            if let Some(contact) =
                resolve(bounds, velocity, &mut position.pos, on_ground, platform.bounds())
            {
                trace!("{:?}: {:?} against {:?}", entity, contact, platform.bounds());
            }
        }
    }
}

/// Keep bodies horizontally inside the level.
pub fn confine_to_level(
    mut query: Query<(&mut MapPosition, &mut Body, &BoxCollider)>,
    level: Res<Level>,
) {
    for (mut position, mut body, collider) in query.iter_mut() {
        let rect = collider.rect(position.pos);
        if rect.x < 0.0 {
            position.pos.x -= rect.x;
            body.velocity.x = body.velocity.x.max(0.0);
        } else if rect.x + rect.width > level.width {
            position.pos.x -= rect.x + rect.width - level.width;
            body.velocity.x = body.velocity.x.min(0.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Body whose position is its top-left corner, so bounds and position coincide.
    fn run(
        bounds: Rectangle,
        velocity: Vector2,
        platform: Rectangle,
    ) -> (Option<Contact>, Vector2, Vector2, bool) {
        let mut velocity = velocity;
        let mut position = Vector2::new(bounds.x, bounds.y);
        let mut on_ground = false;
        let contact = resolve(bounds, &mut velocity, &mut position, &mut on_ground, platform);
        (contact, velocity, position, on_ground)
    }

    // ==================== INTERSECTION ====================

    #[test]
    fn test_intersection_of_overlapping_rects() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(6.0, 4.0, 10.0, 10.0);
        let r = intersection(&a, &b).unwrap();
        assert!(approx_eq(r.x, 6.0));
        assert!(approx_eq(r.y, 4.0));
        assert!(approx_eq(r.width, 4.0));
        assert!(approx_eq(r.height, 6.0));
    }

    #[test]
    fn test_intersection_apart_is_none() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(10.5, 0.0, 10.0, 10.0);
        assert!(intersection(&a, &b).is_none());
    }

    #[test]
    fn test_touching_edges_give_zero_height_overlap() {
        let a = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let b = Rectangle::new(0.0, 10.0, 20.0, 5.0);
        let r = intersection(&a, &b).unwrap();
        assert!(approx_eq(r.height, 0.0));
        assert!(approx_eq(r.width, 10.0));
    }

    // ==================== CLASSIFICATION ====================

    #[test]
    fn test_tall_overlap_is_horizontal() {
        let overlap = Rectangle::new(0.0, 0.0, 4.0, 6.0);
        assert_eq!(classify(&overlap), ContactAxis::Horizontal);
    }

    #[test]
    fn test_wide_overlap_is_vertical() {
        let overlap = Rectangle::new(0.0, 0.0, 6.0, 4.0);
        assert_eq!(classify(&overlap), ContactAxis::Vertical);
    }

    #[test]
    fn test_square_overlap_resolves_vertically() {
        let overlap = Rectangle::new(0.0, 0.0, 5.0, 5.0);
        assert_eq!(classify(&overlap), ContactAxis::Vertical);
    }

    // ==================== RESOLUTION ====================

    #[test]
    fn test_no_overlap_changes_nothing() {
        let bounds = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let (contact, v, p, ground) = run(
            bounds,
            Vector2::new(5.0, 5.0),
            Rectangle::new(50.0, 50.0, 10.0, 10.0),
        );
        assert_eq!(contact, None);
        assert!(approx_eq(v.x, 5.0) && approx_eq(v.y, 5.0));
        assert!(approx_eq(p.x, 0.0) && approx_eq(p.y, 0.0));
        assert!(!ground);
    }

    #[test]
    fn test_landing_on_touching_platform_keeps_skin() {
        let bounds = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        let platform = Rectangle::new(0.0, 10.0, 20.0, 5.0);
        let (contact, v, p, ground) = run(bounds, Vector2::new(0.0, 100.0), platform);
        assert_eq!(contact, Some(Contact::Landing));
        assert!(approx_eq(v.y, 0.0));
        assert!(ground);
        assert!(approx_eq(p.y, 10.0 - 10.0 + GROUND_SKIN));
    }

    #[test]
    fn test_landing_with_penetration_leaves_skin() {
        let bounds = Rectangle::new(0.0, 3.0, 10.0, 10.0);
        let platform = Rectangle::new(-5.0, 10.0, 20.0, 5.0);
        let (contact, _, p, ground) = run(bounds, Vector2::new(20.0, 200.0), platform);
        assert_eq!(contact, Some(Contact::Landing));
        assert!(ground);
        // bottom ends GROUND_SKIN inside the platform top
        assert!(approx_eq(p.y + 10.0, 10.0 + GROUND_SKIN));
    }

    #[test]
    fn test_resting_body_stays_put() {
        let bounds = Rectangle::new(0.0, GROUND_SKIN, 10.0, 10.0);
        let platform = Rectangle::new(0.0, 10.0, 20.0, 5.0);
        let (contact, _, p, ground) = run(bounds, Vector2::new(0.0, 0.0), platform);
        assert_eq!(contact, Some(Contact::Landing));
        assert!(ground);
        assert!(approx_eq(p.y, GROUND_SKIN));
    }

    #[test]
    fn test_ceiling_hit_pushes_down_without_ground() {
        let bounds = Rectangle::new(0.0, 12.0, 10.0, 10.0);
        let platform = Rectangle::new(-5.0, 0.0, 20.0, 14.0);
        let (contact, v, p, ground) = run(bounds, Vector2::new(0.0, -300.0), platform);
        assert_eq!(contact, Some(Contact::Ceiling));
        assert!(approx_eq(v.y, 0.0));
        assert!(approx_eq(p.y, 14.0));
        assert!(!ground);
    }

    #[test]
    fn test_side_hit_from_left_pushes_left() {
        // overlap 4 wide, 6 tall
        let bounds = Rectangle::new(0.0, 4.0, 10.0, 6.0);
        let platform = Rectangle::new(6.0, 0.0, 10.0, 20.0);
        let (contact, v, p, ground) = run(bounds, Vector2::new(120.0, 30.0), platform);
        assert_eq!(contact, Some(Contact::Side));
        assert!(approx_eq(p.x, -4.0));
        assert!(approx_eq(v.x, 0.0));
        assert!(approx_eq(v.y, 30.0));
        assert!(!ground);
    }

    #[test]
    fn test_side_hit_from_right_pushes_right() {
        let bounds = Rectangle::new(14.0, 0.0, 10.0, 10.0);
        let platform = Rectangle::new(0.0, -20.0, 16.0, 40.0);
        let (contact, v, p, _) = run(bounds, Vector2::new(-80.0, 0.0), platform);
        assert_eq!(contact, Some(Contact::Side));
        assert!(approx_eq(p.x, 16.0));
        assert!(approx_eq(v.x, 0.0));
    }

    #[test]
    fn test_wide_overlap_from_above_is_a_landing() {
        // overlap 6 wide, 4 tall
        let bounds = Rectangle::new(10.0, 0.0, 10.0, 10.0);
        let platform = Rectangle::new(14.0, 6.0, 30.0, 30.0);
        let (contact, _, p, ground) = run(bounds, Vector2::new(0.0, 50.0), platform);
        assert_eq!(contact, Some(Contact::Landing));
        assert!(ground);
        assert!(approx_eq(p.y, -4.0 + GROUND_SKIN));
        assert!(approx_eq(p.x, 10.0));
    }

    #[test]
    fn test_resolve_never_clears_ground() {
        let mut velocity = Vector2::new(100.0, 0.0);
        let mut position = Vector2::new(0.0, 0.0);
        let mut on_ground = true;
        let contact = resolve(
            Rectangle::new(0.0, 0.0, 10.0, 10.0),
            &mut velocity,
            &mut position,
            &mut on_ground,
            Rectangle::new(8.0, -10.0, 10.0, 40.0),
        );
        assert_eq!(contact, Some(Contact::Side));
        assert!(on_ground);
    }
}
