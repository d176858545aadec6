use crate::{vec2, Vec2};

/// Axis aligned rectangle with its origin at the bottom left corner, Y up.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn centered_at(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(x - 0.5 * width, y - 0.5 * height, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn half_size(&self) -> Vec2 {
        self.size() * 0.5
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + 0.5 * self.width, self.y + 0.5 * self.height)
    }

    /// Scales the horizontal and vertical terms independently, origin
    /// included.
    pub fn scale(&self, horizontal: f32, vertical: f32) -> Self {
        Self {
            x: self.x * horizontal,
            y: self.y * vertical,
            width: self.width * horizontal,
            height: self.height * vertical,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
    }
}
