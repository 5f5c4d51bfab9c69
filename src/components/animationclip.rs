//! Sprite-sheet animation clip.
//!
//! An [`AnimationClip`] plays one sequence of equally sized frames laid out
//! left-to-right, top-to-bottom in a shared [`Atlas`]. The clip keeps its own
//! playback cursor (frame index + time accumulator) and the placement used to
//! draw the visible sub-rectangle.
//!
//! A clip starts [`ClipSheet::Unloaded`]. Every operation on an unloaded clip
//! is a safe no-op, and the current [`Renderable`] can only be produced from a
//! [`ClipSheet::Ready`] sheet.
//!
//! # Frame addressing
//!
//! ```text
//! frames_per_row = atlas.width / frame.width
//! row = index / frames_per_row
//! col = index % frames_per_row
//! ```

use std::sync::Arc;

use log::warn;
use raylib::prelude::{Rectangle, Vector2};
use serde::{Deserialize, Serialize};

use crate::resources::atlasstore::{Atlas, AtlasError, AtlasLoader, AtlasStore};

/// Default playback rate for clips that have not been configured yet.
pub const DEFAULT_FPS: f32 = 5.0;

/// Size of a single frame cell in atlas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

impl FrameSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// World placement applied to the visible frame.
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub position: Vector2,
    /// Pivot in frame pixels, relative to the frame's top-left corner.
    pub origin: Vector2,
    /// Negative `x` mirrors the frame horizontally.
    pub scale: Vector2,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vector2::zero(),
            origin: Vector2::zero(),
            scale: Vector2::new(1.0, 1.0),
        }
    }
}

impl Placement {
    /// World-space AABB of a `width` x `height` frame drawn with this placement.
    ///
    /// Negative scale is normalized so the result always has a non-negative size.
    pub fn bounds(&self, width: f32, height: f32) -> Rectangle {
        let x0 = self.position.x - self.origin.x * self.scale.x;
        let y0 = self.position.y - self.origin.y * self.scale.y;
        let x1 = self.position.x + (width - self.origin.x) * self.scale.x;
        let y1 = self.position.y + (height - self.origin.y) * self.scale.y;
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        Rectangle::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// What an external draw pass needs to show the current frame.
#[derive(Debug, Clone)]
pub struct Renderable {
    pub atlas: Arc<Atlas>,
    /// Sub-rectangle of the atlas, always fully inside it.
    pub source: Rectangle,
    pub placement: Placement,
}

impl Renderable {
    pub fn bounds(&self) -> Rectangle {
        self.placement.bounds(self.source.width, self.source.height)
    }
}

/// Loaded sheet geometry and playback cursor.
#[derive(Debug, Clone)]
pub struct LoadedSheet {
    atlas: Arc<Atlas>,
    frame_size: FrameSize,
    frame_count: usize,
    current_frame: usize,
    elapsed: f32,
    source: Option<Rectangle>,
}

impl LoadedSheet {
    fn new(atlas: Arc<Atlas>, frame_size: FrameSize, frame_count: usize) -> Self {
        let mut sheet = Self {
            atlas,
            frame_size,
            frame_count,
            current_frame: 0,
            elapsed: 0.0,
            source: None,
        };
        let capacity = sheet.capacity();
        if sheet.frame_count > capacity {
            warn!(
                "Atlas {} holds {} frames of {}x{}, clip asked for {}",
                sheet.atlas.key, capacity, frame_size.width, frame_size.height, frame_count
            );
            sheet.frame_count = capacity;
        }
        sheet.update_source();
        sheet
    }

    /// Zero when the frame width is zero or wider than the atlas.
    fn frames_per_row(&self) -> u32 {
        if self.frame_size.width == 0 {
            return 0;
        }
        self.atlas.width / self.frame_size.width
    }

    fn capacity(&self) -> usize {
        if self.frame_size.height == 0 {
            return 0;
        }
        let rows = self.atlas.height / self.frame_size.height;
        self.frames_per_row() as usize * rows as usize
    }

    fn update_source(&mut self) {
        let per_row = self.frames_per_row();
        if per_row == 0 || self.frame_count == 0 {
            return;
        }
        let index = self.current_frame as u32;
        let row = index / per_row;
        let col = index % per_row;
        self.source = Some(Rectangle::new(
            (col * self.frame_size.width) as f32,
            (row * self.frame_size.height) as f32,
            self.frame_size.width as f32,
            self.frame_size.height as f32,
        ));
    }

    fn rewind(&mut self) {
        self.current_frame = 0;
        self.elapsed = 0.0;
        self.update_source();
    }

    pub fn atlas(&self) -> &Arc<Atlas> {
        &self.atlas
    }

    pub fn frame_size(&self) -> FrameSize {
        self.frame_size
    }

    /// The visible sub-rectangle, `None` for degenerate geometry.
    pub fn source(&self) -> Option<Rectangle> {
        self.source
    }

    pub fn renderable(&self, placement: Placement) -> Option<Renderable> {
        self.source.map(|source| Renderable {
            atlas: Arc::clone(&self.atlas),
            source,
            placement,
        })
    }
}

/// Tagged load state of a clip.
#[derive(Debug, Clone, Default)]
pub enum ClipSheet {
    #[default]
    Unloaded,
    Ready(LoadedSheet),
}

/// One animation sequence bound to a region of an atlas.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    sheet: ClipSheet,
    fps: f32,
    looping: bool,
    playing: bool,
    placement: Placement,
}

impl Default for AnimationClip {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClip {
    /// Create an empty, unloaded clip that will play and loop once loaded.
    pub fn new() -> Self {
        Self {
            sheet: ClipSheet::Unloaded,
            fps: DEFAULT_FPS,
            looping: true,
            playing: true,
            placement: Placement::default(),
        }
    }

    /// Builder-style loop flag.
    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Attach an already decoded atlas and reset the cursor to frame 0.
    pub fn load(
        &mut self,
        atlas: Arc<Atlas>,
        frame_size: FrameSize,
        frame_count: usize,
        fps: f32,
    ) {
        self.fps = fps;
        self.sheet = ClipSheet::Ready(LoadedSheet::new(atlas, frame_size, frame_count));
    }

    /// Resolve `path` through the shared store and load it.
    ///
    /// On failure the clip keeps its previous sheet state.
    pub fn load_from_file(
        &mut self,
        atlases: &mut AtlasStore,
        loader: &mut dyn AtlasLoader,
        path: &str,
        frame_size: FrameSize,
        frame_count: usize,
        fps: f32,
    ) -> Result<(), AtlasError> {
        let atlas = atlases.load(loader, path)?;
        self.load(atlas, frame_size, frame_count, fps);
        Ok(())
    }

    /// Advance playback by `delta` seconds.
    ///
    /// Catches up on as many whole frame periods as have accumulated and keeps
    /// the remainder for the next call. Non-finite deltas and rates whose
    /// period is not a positive finite number are ignored.
    pub fn advance(&mut self, delta: f32) {
        if !self.playing || !delta.is_finite() || delta <= 0.0 {
            return;
        }
        let period = 1.0 / self.fps;
        if !period.is_finite() || period <= 0.0 {
            return;
        }
        let ClipSheet::Ready(sheet) = &mut self.sheet else {
            return;
        };
        if sheet.frame_count == 0 {
            return;
        }

        sheet.elapsed += delta;
        if sheet.elapsed < period {
            return;
        }

        // Whole periods in f64 so large catch-ups stay exact.
        let elapsed = f64::from(sheet.elapsed);
        let period = f64::from(period);
        let steps = (elapsed / period).floor();
        let remainder = (elapsed - steps * period).clamp(0.0, period);
        let count = sheet.frame_count;
        let start = sheet.current_frame;

        if self.looping {
            let offset = (steps % count as f64) as usize;
            sheet.current_frame = (start + offset) % count;
            sheet.elapsed = remainder as f32;
        } else if steps >= (count - start) as f64 {
            sheet.current_frame = count - 1;
            sheet.elapsed = 0.0;
            self.playing = false;
        } else {
            sheet.current_frame = start + steps as usize;
            sheet.elapsed = remainder as f32;
        }

        if sheet.current_frame != start {
            sheet.update_source();
        }
    }

    /// Show frame `frame` directly. Out-of-range requests are ignored.
    pub fn jump_to_frame(&mut self, frame: usize) {
        if let ClipSheet::Ready(sheet) = &mut self.sheet {
            if frame < sheet.frame_count {
                sheet.current_frame = frame;
                sheet.update_source();
            }
        }
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Pause and rewind to the first frame.
    pub fn stop(&mut self) {
        self.playing = false;
        if let ClipSheet::Ready(sheet) = &mut self.sheet {
            sheet.rewind();
        }
    }

    /// Rewind to the first frame and play.
    pub fn restart(&mut self) {
        if let ClipSheet::Ready(sheet) = &mut self.sheet {
            sheet.rewind();
        }
        self.playing = true;
    }

    pub fn set_playback_rate(&mut self, fps: f32) {
        self.fps = fps;
    }

    pub fn set_loop(&mut self, looping: bool) {
        self.looping = looping;
    }

    pub fn set_position(&mut self, position: Vector2) {
        self.placement.position = position;
    }

    pub fn set_scale(&mut self, scale: Vector2) {
        self.placement.scale = scale;
    }

    pub fn set_origin(&mut self, origin: Vector2) {
        self.placement.origin = origin;
    }

    pub fn sheet(&self) -> &ClipSheet {
        &self.sheet
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.sheet, ClipSheet::Ready(_))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn playback_rate(&self) -> f32 {
        self.fps
    }

    /// Current frame index, 0 while unloaded.
    pub fn current_frame(&self) -> usize {
        match &self.sheet {
            ClipSheet::Ready(sheet) => sheet.current_frame,
            ClipSheet::Unloaded => 0,
        }
    }

    pub fn frame_count(&self) -> usize {
        match &self.sheet {
            ClipSheet::Ready(sheet) => sheet.frame_count,
            ClipSheet::Unloaded => 0,
        }
    }

    /// Time accumulated towards the next frame, in seconds.
    pub fn elapsed(&self) -> f32 {
        match &self.sheet {
            ClipSheet::Ready(sheet) => sheet.elapsed,
            ClipSheet::Unloaded => 0.0,
        }
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn position(&self) -> Vector2 {
        self.placement.position
    }

    pub fn scale(&self) -> Vector2 {
        self.placement.scale
    }

    pub fn origin(&self) -> Vector2 {
        self.placement.origin
    }

    pub fn source_rect(&self) -> Option<Rectangle> {
        match &self.sheet {
            ClipSheet::Ready(sheet) => sheet.source(),
            ClipSheet::Unloaded => None,
        }
    }

    /// The frame to draw this step, if the clip is loaded with valid geometry.
    pub fn renderable(&self) -> Option<Renderable> {
        match &self.sheet {
            ClipSheet::Ready(sheet) => sheet.renderable(self.placement),
            ClipSheet::Unloaded => None,
        }
    }

    /// World-space bounds of the visible frame.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.renderable().map(|r| r.bounds())
    }
}
