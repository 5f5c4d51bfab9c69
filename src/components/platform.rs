//! Static level geometry.

use raylib::prelude::{Color, Rectangle};
use serde::{Deserialize, Serialize};

/// An immutable axis-aligned solid rectangle.
///
/// Fields are private so a platform cannot be changed after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    #[serde(default = "default_color")]
    color: [u8; 4],
}

fn default_color() -> [u8; 4] {
    [0, 0, 0, 255]
}

impl Platform {
    /// `x`/`y` is the top-left corner.
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color: [color.r, color.g, color.b, color.a],
        }
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, self.width, self.height)
    }

    pub fn color(&self) -> Color {
        let [r, g, b, a] = self.color;
        Color::new(r, g, b, a)
    }
}
