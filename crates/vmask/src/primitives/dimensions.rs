use crate::{vec2, Vec2};

/// Size of a camera viewport in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
}

impl Dimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }

    #[inline]
    pub fn half(&self) -> Vec2 {
        vec2(0.5 * self.width, 0.5 * self.height)
    }

    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from(value: (u32, u32)) -> Self {
        Self::new(value.0 as f32, value.1 as f32)
    }
}
