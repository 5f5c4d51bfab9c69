//! ECS resources made available to systems.
//!
//! Overview
//! - `atlasstore` – shared atlas handles and the loader seam
//! - `debugmode` – presence toggles collider overlays
//! - `gameconfig` – INI-backed window, physics and locomotion settings
//! - `level` – ordered static platforms and world extents
//! - `playerinput` – per-frame movement intent for the player
//! - `profile` – data-driven actor definitions
//! - `texturestore` – GPU textures keyed by atlas path (render only)
//! - `worldtime` – simulation time and delta
pub mod atlasstore;
pub mod debugmode;
pub mod gameconfig;
pub mod level;
pub mod playerinput;
pub mod profile;
pub mod texturestore;
pub mod worldtime;
