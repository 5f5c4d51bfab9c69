//! Engine systems.
//!
//! Submodules overview
//! - [`animation`] – keep clips at the entity position and advance the active one
//! - [`collision`] – AABB intersection, push-out resolution and level bounds
//! - [`control`] – translate [`crate::resources::playerinput::PlayerInput`] into velocity
//! - [`locomotion`] – pick the locomotion state and mirror clips by facing
//! - [`movement`] – integrate gravity and velocity into position
//! - [`render`] – draw the level and the active frames using Raylib
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod collision;
pub mod control;
pub mod locomotion;
pub mod movement;
pub mod render;
pub mod time;
