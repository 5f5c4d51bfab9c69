//! scrollcore library.
//!
//! Runtime core of a 2D side-scrolling platformer: sprite-sheet animation
//! clips, AABB push-out against static platforms and the locomotion state
//! machine that picks which clip plays. Exposed as a library so integration
//! tests can drive the ECS world directly.

pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
