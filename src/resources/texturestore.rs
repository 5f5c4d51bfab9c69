use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// GPU textures keyed by atlas path, used by the render pass only.
#[derive(Resource, Default)]
pub struct TextureStore {
    pub map: FxHashMap<Arc<str>, Texture2D>,
}

impl TextureStore {
    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}
