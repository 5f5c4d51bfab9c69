//! Static level layout.
//!
//! The [`Level`] resource owns the ordered platform list the collision
//! resolver walks every step, plus the world extents used for boundary
//! clamping. Platforms are resolved in the order they appear here.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "width": 800, "height": 600,
//!   "platforms": [
//!     { "x": 0, "y": 550, "width": 800, "height": 50, "color": [0, 228, 48, 255] }
//!   ]
//! }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use raylib::prelude::Color;
use serde::{Deserialize, Serialize};

use crate::components::platform::Platform;

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub width: f32,
    pub height: f32,
    platforms: Vec<Platform>,
}

impl Level {
    pub fn new(width: f32, height: f32, platforms: Vec<Platform>) -> Self {
        Self {
            width,
            height,
            platforms,
        }
    }

    /// Ground plus three ascending ledges in an 800x600 world.
    pub fn demo() -> Self {
        Self::new(
            800.0,
            600.0,
            vec![
                Platform::new(0.0, 550.0, 800.0, 50.0, Color::GREEN),
                Platform::new(200.0, 450.0, 150.0, 20.0, Color::BLACK),
                Platform::new(400.0, 350.0, 150.0, 20.0, Color::BLACK),
                Platform::new(600.0, 250.0, 150.0, 20.0, Color::BLACK),
            ],
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse level: {}", e))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level {:?}: {}", path, e))?;
        let level = Self::from_json_str(&json)?;
        info!(
            "Loaded level {:?}: {}x{} with {} platforms",
            path,
            level.width,
            level.height,
            level.platforms.len()
        );
        Ok(level)
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_layout_order() {
        let level = Level::demo();
        let tops: Vec<f32> = level.platforms().iter().map(|p| p.bounds().y).collect();
        assert_eq!(tops, vec![550.0, 450.0, 350.0, 250.0]);
        assert_eq!(level.platforms()[0].bounds().width, 800.0);
    }

    #[test]
    fn test_from_json_defaults_color() {
        let level = Level::from_json_str(
            r#"{"width": 320, "height": 180, "platforms": [
                {"x": 0, "y": 170, "width": 320, "height": 10},
                {"x": 40, "y": 120, "width": 60, "height": 8, "color": [255, 0, 0, 255]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(level.platforms().len(), 2);
        assert_eq!(level.platforms()[0].color().a, 255);
        assert_eq!(level.platforms()[0].color().r, 0);
        assert_eq!(level.platforms()[1].color().r, 255);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(Level::from_json_str("{\"platforms\": 3}").is_err());
    }
}
