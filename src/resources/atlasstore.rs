//! Shared texture atlas registry.
//!
//! Clips never own pixel data. They hold an [`Arc<Atlas>`] describing the sheet
//! they sample from, and every clip loaded from the same path receives the same
//! handle through the [`AtlasStore`]. Decoding is delegated to an
//! [`AtlasLoader`] so the simulation only ever sees post-load dimensions.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use log::{debug, info};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Pixel dimensions reported by a loader after a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasSize {
    pub width: u32,
    pub height: u32,
}

impl AtlasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A decoded sprite sheet, identified by the path it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atlas {
    /// Opaque asset path, passed through unchanged. Also the texture key used
    /// by the renderer.
    pub key: Arc<str>,
    pub width: u32,
    pub height: u32,
}

impl Atlas {
    pub fn new(key: impl Into<Arc<str>>, size: AtlasSize) -> Self {
        Self {
            key: key.into(),
            width: size.width,
            height: size.height,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AtlasError {
    #[error("atlas not found: {path}")]
    NotFound { path: String },
    #[error("failed to decode atlas {path}: {reason}")]
    Decode { path: String, reason: String },
}

/// Collaborator that turns an asset path into a decoded image.
pub trait AtlasLoader {
    fn load_texture(&mut self, path: &str) -> Result<AtlasSize, AtlasError>;
}

/// Loads images CPU-side through raylib to read their dimensions.
///
/// Works without an open window, which makes it usable from tools and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct RaylibImageLoader;

impl AtlasLoader for RaylibImageLoader {
    fn load_texture(&mut self, path: &str) -> Result<AtlasSize, AtlasError> {
        if !std::path::Path::new(path).exists() {
            return Err(AtlasError::NotFound {
                path: path.to_string(),
            });
        }
        let image = raylib::prelude::Image::load_image(path).map_err(|e| AtlasError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
        let (width, height) = (image.width(), image.height());
        if width <= 0 || height <= 0 {
            return Err(AtlasError::Decode {
                path: path.to_string(),
                reason: format!("empty image {}x{}", width, height),
            });
        }
        Ok(AtlasSize::new(width as u32, height as u32))
    }
}

/// Cache of loaded atlases keyed by path.
#[derive(Resource, Default)]
pub struct AtlasStore {
    atlases: FxHashMap<Arc<str>, Arc<Atlas>>,
}

impl AtlasStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the shared handle for `path`, decoding it on first use.
    ///
    /// Failures are not cached; a later call retries the loader.
    pub fn load(
        &mut self,
        loader: &mut dyn AtlasLoader,
        path: &str,
    ) -> Result<Arc<Atlas>, AtlasError> {
        if let Some(atlas) = self.atlases.get(path) {
            debug!("Atlas cache hit: {}", path);
            return Ok(Arc::clone(atlas));
        }
        let size = loader.load_texture(path)?;
        let atlas = Arc::new(Atlas::new(path, size));
        info!("Loaded atlas {} ({}x{})", path, size.width, size.height);
        self.atlases.insert(Arc::clone(&atlas.key), Arc::clone(&atlas));
        Ok(atlas)
    }

    pub fn get(&self, path: &str) -> Option<Arc<Atlas>> {
        self.atlases.get(path).cloned()
    }

    pub fn len(&self) -> usize {
        self.atlases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atlases.is_empty()
    }
}
