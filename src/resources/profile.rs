//! Data-driven actor definitions.
//!
//! An [`ActorProfile`] describes everything that differs between kinds of
//! actors: sprite sheets, frame geometry, which clip plays for which
//! locomotion state, speed thresholds and gravity. Adding a new enemy kind is
//! a new profile, not new code.
//!
//! Profiles can be built in code ([`ActorProfile::player`],
//! [`ActorProfile::dragon`]) or deserialized from JSON.

use log::error;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::components::actor::Controller;
use crate::components::animationclip::{AnimationClip, FrameSize};
use crate::components::body::DEFAULT_GRAVITY;
use crate::components::clipset::ClipSet;
use crate::components::locomotion::{LocomotionState, LocomotionTuning};
use crate::resources::atlasstore::{AtlasError, AtlasLoader, AtlasStore};

fn default_true() -> bool {
    true
}

fn default_scale() -> f32 {
    1.0
}

fn default_gravity() -> f32 {
    DEFAULT_GRAVITY
}

/// One clip of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipDef {
    pub key: String,
    /// Atlas path, passed to the loader unchanged.
    pub path: String,
    pub frame_count: usize,
    pub fps: f32,
    #[serde(default = "default_true")]
    pub looped: bool,
}

impl ClipDef {
    pub fn new(key: &str, path: &str, frame_count: usize, fps: f32) -> Self {
        Self {
            key: key.to_string(),
            path: path.to_string(),
            frame_count,
            fps,
            looped: true,
        }
    }

    pub fn once(mut self) -> Self {
        self.looped = false;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitboxDef {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorProfile {
    pub name: String,
    pub frame_size: FrameSize,
    /// Uniform draw scale; its sign is managed by facing.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Defaults to the scaled frame size.
    #[serde(default)]
    pub hitbox: Option<HitboxDef>,
    pub clips: Vec<ClipDef>,
    /// Overrides of the default state → clip key mapping.
    #[serde(default)]
    pub bindings: FxHashMap<LocomotionState, String>,
    #[serde(default)]
    pub tuning: LocomotionTuning,
    #[serde(default = "default_gravity")]
    pub gravity: f32,
    /// Present for input-driven actors.
    #[serde(default)]
    pub controller: Option<Controller>,
}

impl ActorProfile {
    /// 36x36 hero sheets drawn at 2x.
    pub fn player() -> Self {
        Self {
            name: "player".to_string(),
            frame_size: FrameSize::new(36, 36),
            scale: 2.0,
            hitbox: None,
            clips: vec![
                ClipDef::new("idle", "assets/player/idle.png", 4, 8.0),
                ClipDef::new("walk", "assets/player/walk.png", 4, 10.0),
                ClipDef::new("run", "assets/player/run.png", 4, 14.0),
                ClipDef::new("jump", "assets/player/jump.png", 4, 10.0).once(),
            ],
            bindings: FxHashMap::default(),
            tuning: LocomotionTuning::default(),
            gravity: DEFAULT_GRAVITY,
            controller: Some(Controller::default()),
        }
    }

    /// 256x256 dragon sheets. Has no run or jump clip of its own.
    pub fn dragon() -> Self {
        let mut bindings = FxHashMap::default();
        bindings.insert(LocomotionState::Run, "walk".to_string());
        bindings.insert(LocomotionState::Jump, "idle".to_string());
        Self {
            name: "dragon".to_string(),
            frame_size: FrameSize::new(256, 256),
            scale: 0.5,
            hitbox: Some(HitboxDef {
                width: 96.0,
                height: 96.0,
            }),
            clips: vec![
                ClipDef::new("idle", "assets/Enemies/dragon/Idle.png", 3, 8.0),
                ClipDef::new("walk", "assets/Enemies/dragon/Walk.png", 5, 8.0),
                ClipDef::new("attack", "assets/Enemies/dragon/Attack.png", 4, 8.0),
                ClipDef::new("death", "assets/Enemies/dragon/Death.png", 5, 8.0).once(),
            ],
            bindings,
            tuning: LocomotionTuning::default(),
            gravity: DEFAULT_GRAVITY,
            controller: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse actor profile: {}", e))
    }

    /// Hitbox width and height in world units.
    pub fn hitbox_size(&self) -> (f32, f32) {
        match self.hitbox {
            Some(h) => (h.width, h.height),
            None => (
                self.frame_size.width as f32 * self.scale.abs(),
                self.frame_size.height as f32 * self.scale.abs(),
            ),
        }
    }

    /// Build the clip set, loading every clip through the shared store.
    ///
    /// A clip that fails to load stays unloaded inside the set and its error
    /// is returned alongside; the remaining clips are still loaded.
    pub fn load_clips(
        &self,
        atlases: &mut AtlasStore,
        loader: &mut dyn AtlasLoader,
    ) -> (ClipSet, Vec<AtlasError>) {
        let mut failures = Vec::new();
        let mut clips: Vec<(String, AnimationClip)> = Vec::with_capacity(self.clips.len());

        for def in &self.clips {
            let mut clip = AnimationClip::new().with_loop(def.looped);
            clip.set_playback_rate(def.fps);
            if let Err(e) = clip.load_from_file(
                atlases,
                loader,
                &def.path,
                self.frame_size,
                def.frame_count,
                def.fps,
            ) {
                error!("{}: clip '{}' not loaded: {}", self.name, def.key, e);
                failures.push(e);
            }
            clips.push((def.key.clone(), clip));
        }

        let mut iter = clips.into_iter();
        let mut set = match iter.next() {
            Some((key, clip)) => ClipSet::new(key, clip),
            None => ClipSet::new(LocomotionState::Idle.default_clip_key(), AnimationClip::new()),
        };
        for (key, clip) in iter {
            set.insert(key, clip);
        }
        for (state, key) in &self.bindings {
            set = set.with_binding(*state, key.clone());
        }

        let origin = Vector2::new(
            self.frame_size.width as f32 * 0.5,
            self.frame_size.height as f32 * 0.5,
        );
        set.set_placement(Vector2::new(self.scale.abs(), self.scale.abs()), origin);
        let idle_key = set.key_for(LocomotionState::Idle).to_string();
        if set.get(&idle_key).is_some() {
            set.activate(&idle_key);
        }

        (set, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::atlasstore::tests::TableLoader;

    #[test]
    fn test_player_profile_loads_all_clips_from_shared_store() {
        let profile = ActorProfile::player();
        let mut loader = TableLoader::default()
            .with("assets/player/idle.png", 144, 36)
            .with("assets/player/walk.png", 144, 36)
            .with("assets/player/run.png", 144, 36)
            .with("assets/player/jump.png", 144, 36);
        let mut store = AtlasStore::new();

        let (set, failures) = profile.load_clips(&mut store, &mut loader);
        assert!(failures.is_empty());
        assert_eq!(set.len(), 4);
        assert_eq!(set.active_key(), "idle");
        assert!(set.iter().all(|(_, c)| c.is_ready()));
        assert!(!set.get("jump").unwrap().is_looping());
        assert_eq!(set.active().origin().x, 18.0);
        assert_eq!(set.active().scale().x, 2.0);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_failed_clip_stays_unloaded() {
        let profile = ActorProfile::dragon();
        let mut loader = TableLoader::default()
            .with("assets/Enemies/dragon/Idle.png", 768, 256)
            .with("assets/Enemies/dragon/Walk.png", 1280, 256);
        let mut store = AtlasStore::new();

        let (set, failures) = profile.load_clips(&mut store, &mut loader);
        assert_eq!(failures.len(), 2);
        assert!(set.get("idle").unwrap().is_ready());
        assert!(!set.get("attack").unwrap().is_ready());
        assert!(!set.get("death").unwrap().is_ready());
        assert_eq!(set.key_for(LocomotionState::Run), "walk");
    }

    #[test]
    fn test_hitbox_defaults_to_scaled_frame() {
        assert_eq!(ActorProfile::player().hitbox_size(), (72.0, 72.0));
        assert_eq!(ActorProfile::dragon().hitbox_size(), (96.0, 96.0));
    }

    #[test]
    fn test_profile_from_json() {
        let profile = ActorProfile::from_json_str(
            r#"{
                "name": "slime",
                "frame_size": {"width": 16, "height": 16},
                "clips": [
                    {"key": "idle", "path": "slime.png", "frame_count": 2, "fps": 4.0},
                    {"key": "hop", "path": "slime_hop.png", "frame_count": 3, "fps": 6.0, "looped": false}
                ],
                "bindings": {"walk": "hop", "run": "hop", "jump": "hop"},
                "tuning": {"walk_threshold": 1.0, "run_threshold": 50.0}
            }"#,
        )
        .unwrap();
        assert_eq!(profile.scale, 1.0);
        assert_eq!(profile.gravity, DEFAULT_GRAVITY);
        assert!(profile.controller.is_none());
        assert!(!profile.clips[1].looped);
        assert_eq!(
            profile.bindings.get(&LocomotionState::Jump).map(String::as_str),
            Some("hop")
        );
    }
}
