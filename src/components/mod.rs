//! ECS components for entities.
//!
//! Submodules overview:
//! - [`actor`] – player/enemy markers and input-driven speed tuning
//! - [`animationclip`] – one sprite-sheet clip with its own playback cursor
//! - [`body`] – velocity, gravity and the per-step ground flag
//! - [`boxcollider`] – axis-aligned hitbox relative to the entity position
//! - [`clipset`] – the named clips of an entity and which one is active
//! - [`facing`] – horizontal orientation shared by all clips of an entity
//! - [`locomotion`] – idle/walk/run/jump state machine
//! - [`mapposition`] – world-space position (centre anchor) for an entity
//! - [`platform`] – immutable static level rectangle

pub mod actor;
pub mod animationclip;
pub mod body;
pub mod boxcollider;
pub mod clipset;
pub mod facing;
pub mod locomotion;
pub mod mapposition;
pub mod platform;
