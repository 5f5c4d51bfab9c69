//! Named set of animation clips owned by one entity.
//!
//! All clips in a set share the entity's position and facing but keep their
//! own playback cursors. Exactly one clip is active; the active clip is the one
//! that advances and gets drawn.
//!
//! Locomotion states are bound to clip keys. A state without an explicit
//! binding uses its default key (`"idle"`, `"walk"`, ...), so profiles only
//! need to spell out the states whose clip differs.

use bevy_ecs::prelude::Component;
use log::warn;
use raylib::prelude::Vector2;
use rustc_hash::FxHashMap;

use crate::components::animationclip::{AnimationClip, Renderable};
use crate::components::facing::Facing;
use crate::components::locomotion::LocomotionState;

#[derive(Component, Debug, Clone)]
pub struct ClipSet {
    clips: FxHashMap<String, AnimationClip>,
    bindings: FxHashMap<LocomotionState, String>,
    active_key: String,
}

impl ClipSet {
    /// Create a set whose first and active clip is `key`.
    pub fn new(key: impl Into<String>, clip: AnimationClip) -> Self {
        let key = key.into();
        let mut clips = FxHashMap::default();
        clips.insert(key.clone(), clip);
        Self {
            clips,
            bindings: FxHashMap::default(),
            active_key: key,
        }
    }

    pub fn with_clip(mut self, key: impl Into<String>, clip: AnimationClip) -> Self {
        self.insert(key, clip);
        self
    }

    /// Bind `state` to a clip key other than its default.
    pub fn with_binding(mut self, state: LocomotionState, key: impl Into<String>) -> Self {
        self.bindings.insert(state, key.into());
        self
    }

    /// Add or replace a clip.
    pub fn insert(&mut self, key: impl Into<String>, clip: AnimationClip) {
        self.clips.insert(key.into(), clip);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationClip> {
        self.clips.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut AnimationClip> {
        self.clips.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Clip key bound to `state`.
    pub fn key_for(&self, state: LocomotionState) -> &str {
        self.bindings
            .get(&state)
            .map(String::as_str)
            .unwrap_or_else(|| state.default_clip_key())
    }

    pub fn active_key(&self) -> &str {
        &self.active_key
    }

    pub fn active(&self) -> &AnimationClip {
        // active_key always names an existing clip: it is set in `new` and only
        // replaced by `activate` after a successful lookup.
        &self.clips[&self.active_key]
    }

    pub fn active_mut(&mut self) -> Option<&mut AnimationClip> {
        self.clips.get_mut(&self.active_key)
    }

    /// Make `key` the active clip and restart it from frame 0.
    ///
    /// Returns false, leaving the current clip active, when `key` is unknown.
    pub fn activate(&mut self, key: &str) -> bool {
        let Some(clip) = self.clips.get_mut(key) else {
            warn!("ClipSet has no clip named '{}', keeping '{}'", key, self.active_key);
            return false;
        };
        clip.restart();
        if self.active_key != key {
            self.active_key = key.to_string();
        }
        true
    }

    /// Switch to the clip bound to `state`.
    pub fn activate_state(&mut self, state: LocomotionState) -> bool {
        let key = self.key_for(state).to_string();
        self.activate(&key)
    }

    /// Move every clip, visible or not, to `position`.
    pub fn sync_position(&mut self, position: Vector2) {
        for clip in self.clips.values_mut() {
            clip.set_position(position);
        }
    }

    /// Point every clip the same way by setting the sign of its horizontal scale.
    pub fn apply_facing(&mut self, facing: Facing) {
        let sign = facing.sign();
        for clip in self.clips.values_mut() {
            let scale = clip.scale();
            clip.set_scale(Vector2::new(scale.x.abs() * sign, scale.y));
        }
    }

    /// Set the same scale magnitude and origin on every clip.
    pub fn set_placement(&mut self, scale: Vector2, origin: Vector2) {
        for clip in self.clips.values_mut() {
            clip.set_scale(scale);
            clip.set_origin(origin);
        }
    }

    /// Advance only the active clip.
    pub fn advance(&mut self, delta: f32) {
        if let Some(clip) = self.active_mut() {
            clip.advance(delta);
        }
    }

    pub fn renderable(&self) -> Option<Renderable> {
        self.active().renderable()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnimationClip)> {
        self.clips.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::components::animationclip::FrameSize;
    use crate::resources::atlasstore::{Atlas, AtlasSize};

    fn loaded(frames: usize) -> AnimationClip {
        let atlas = Arc::new(Atlas::new("hero.png", AtlasSize::new(36 * 8, 36)));
        let mut clip = AnimationClip::new();
        clip.load(atlas, FrameSize::new(36, 36), frames, 10.0);
        clip
    }

    fn hero() -> ClipSet {
        ClipSet::new("idle", loaded(4))
            .with_clip("walk", loaded(6))
            .with_clip("run", loaded(8))
            .with_clip("jump", loaded(2))
    }

    #[test]
    fn test_default_bindings_follow_state_names() {
        let set = hero();
        assert_eq!(set.key_for(LocomotionState::Run), "run");
        let set = set.with_binding(LocomotionState::Run, "walk");
        assert_eq!(set.key_for(LocomotionState::Run), "walk");
        assert_eq!(set.key_for(LocomotionState::Jump), "jump");
    }

    #[test]
    fn test_activate_restarts_target_clip() {
        let mut set = hero();
        {
            let walk = set.get_mut("walk").unwrap();
            walk.jump_to_frame(3);
            walk.advance(0.05);
            walk.pause();
        }
        assert!(set.activate_state(LocomotionState::Walk));
        assert_eq!(set.active_key(), "walk");
        let walk = set.active();
        assert_eq!(walk.current_frame(), 0);
        assert_eq!(walk.elapsed(), 0.0);
        assert!(walk.is_playing());
    }

    #[test]
    fn test_activate_unknown_key_keeps_active() {
        let mut set = ClipSet::new("idle", loaded(4));
        assert!(!set.activate("attack"));
        assert_eq!(set.active_key(), "idle");
    }

    #[test]
    fn test_advance_moves_only_active_clip() {
        let mut set = hero();
        set.advance(0.1);
        assert_eq!(set.get("idle").unwrap().current_frame(), 1);
        assert_eq!(set.get("walk").unwrap().current_frame(), 0);
    }

    #[test]
    fn test_sync_and_facing_apply_to_all_clips() {
        let mut set = hero();
        set.set_placement(Vector2::new(2.0, 2.0), Vector2::new(18.0, 18.0));
        set.sync_position(Vector2::new(40.0, 60.0));
        set.apply_facing(Facing::Left);
        for (_, clip) in set.iter() {
            assert_eq!(clip.position().x, 40.0);
            assert_eq!(clip.position().y, 60.0);
            assert_eq!(clip.scale().x, -2.0);
            assert_eq!(clip.scale().y, 2.0);
        }
        set.apply_facing(Facing::Right);
        assert!(set.iter().all(|(_, c)| c.scale().x == 2.0));
    }
}
