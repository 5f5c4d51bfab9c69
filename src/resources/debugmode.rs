//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that collider overlays and
//! extra diagnostics should be drawn. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render pass draws hitboxes and state labels.
#[derive(Resource, Clone, Copy, Default)]
pub struct DebugMode {}
