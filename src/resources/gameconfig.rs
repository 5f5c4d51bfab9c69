//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 120
//!
//! [physics]
//! gravity = 980
//! jump_velocity = -400
//!
//! [locomotion]
//! walk_threshold = 10
//! run_threshold = 200
//! walk_speed = 150
//! run_speed = 300
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::components::actor::Controller;
use crate::components::body::DEFAULT_GRAVITY;
use crate::components::locomotion::{
    DEFAULT_RUN_THRESHOLD, DEFAULT_WALK_THRESHOLD, LocomotionTuning,
};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_JUMP_VELOCITY: f32 = -400.0;
const DEFAULT_WALK_SPEED: f32 = 150.0;
const DEFAULT_RUN_SPEED: f32 = 300.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Downward acceleration in px/s².
    pub gravity: f32,
    /// Player launch velocity in px/s (negative is up).
    pub jump_velocity: f32,
    pub walk_threshold: f32,
    pub run_threshold: f32,
    pub walk_speed: f32,
    pub run_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            gravity: DEFAULT_GRAVITY,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            walk_threshold: DEFAULT_WALK_THRESHOLD,
            run_threshold: DEFAULT_RUN_THRESHOLD,
            walk_speed: DEFAULT_WALK_SPEED,
            run_speed: DEFAULT_RUN_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [physics] section
        if let Some(gravity) = config.getfloat("physics", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }
        if let Some(jump) = config.getfloat("physics", "jump_velocity").ok().flatten() {
            self.jump_velocity = jump as f32;
        }

        // [locomotion] section
        if let Some(v) = config.getfloat("locomotion", "walk_threshold").ok().flatten() {
            self.walk_threshold = v as f32;
        }
        if let Some(v) = config.getfloat("locomotion", "run_threshold").ok().flatten() {
            self.run_threshold = v as f32;
        }
        if let Some(v) = config.getfloat("locomotion", "walk_speed").ok().flatten() {
            self.walk_speed = v as f32;
        }
        if let Some(v) = config.getfloat("locomotion", "run_speed").ok().flatten() {
            self.run_speed = v as f32;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, gravity={}, jump={}, walk>{} run>{}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.gravity,
            self.jump_velocity,
            self.walk_threshold,
            self.run_threshold
        );
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        config.set("physics", "gravity", Some(self.gravity.to_string()));
        config.set(
            "physics",
            "jump_velocity",
            Some(self.jump_velocity.to_string()),
        );

        config.set(
            "locomotion",
            "walk_threshold",
            Some(self.walk_threshold.to_string()),
        );
        config.set(
            "locomotion",
            "run_threshold",
            Some(self.run_threshold.to_string()),
        );
        config.set("locomotion", "walk_speed", Some(self.walk_speed.to_string()));
        config.set("locomotion", "run_speed", Some(self.run_speed.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn locomotion_tuning(&self) -> LocomotionTuning {
        LocomotionTuning {
            walk_threshold: self.walk_threshold,
            run_threshold: self.run_threshold,
        }
    }

    pub fn controller(&self) -> Controller {
        Controller {
            walk_speed: self.walk_speed,
            run_speed: self.run_speed,
            jump_velocity: self.jump_velocity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.gravity, 980.0);
        assert_eq!(config.locomotion_tuning(), LocomotionTuning::default());
        assert_eq!(config.controller(), Controller::default());
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[window]\nwidth = 1024\n\n[physics]\ngravity = 500.5\n\n[locomotion]\nrun_threshold = 250\n",
            )
            .unwrap();
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.gravity, 500.5);
        assert_eq!(config.run_threshold, 250.0);
        assert_eq!(config.walk_threshold, 10.0);
    }

    #[test]
    fn test_unparsable_values_keep_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[physics]\ngravity = heavy\n")
            .unwrap();
        assert_eq!(config.gravity, 980.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./no/such/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.target_fps, 120);
    }
}
