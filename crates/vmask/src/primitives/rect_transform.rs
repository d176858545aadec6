use crate::{primitives::Rect, vec3, vec4, Mat4, Vec2, Vec3};

/// Index of a corner in the array returned by [`WorldCorners::world_corners`].
///
/// Corners go clockwise starting at the bottom left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Corner {
    BottomLeft = 0,
    TopLeft = 1,
    TopRight = 2,
    BottomRight = 3,
}

impl Corner {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Anything that can report the four world space corners of a rectangle.
pub trait WorldCorners {
    fn world_corners(&self) -> [Vec3; 4];
}

/// A sized rectangle placed in the world by an affine transform.
///
/// The local rectangle spans `-pivot * size .. (1 - pivot) * size` so the
/// transform origin lands on the pivot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectTransform {
    pub size: Vec2,
    pub pivot: Vec2,
    pub local_to_world: Mat4,
}

impl RectTransform {
    pub fn new(size: Vec2, pivot: Vec2, local_to_world: Mat4) -> Self {
        Self { size, pivot, local_to_world }
    }

    /// A rect whose pivot sits at `position` with no rotation or scale.
    pub fn at(position: Vec3, size: Vec2, pivot: Vec2) -> Self {
        Self::new(size, pivot, Mat4::new_translation(&position))
    }

    /// Applies a uniform scale in local space, the way a scaled canvas
    /// shrinks or grows everything below it.
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            local_to_world: self.local_to_world * Mat4::new_scaling(factor),
            ..self
        }
    }

    pub fn local_rect(&self) -> Rect {
        Rect::new(
            -self.pivot.x * self.size.x,
            -self.pivot.y * self.size.y,
            self.size.x,
            self.size.y,
        )
    }

    fn to_world(&self, x: f32, y: f32) -> Vec3 {
        let point = self.local_to_world * vec4(x, y, 0.0, 1.0);
        vec3(point.x, point.y, point.z)
    }
}

impl WorldCorners for RectTransform {
    fn world_corners(&self) -> [Vec3; 4] {
        let rect = self.local_rect();
        [
            self.to_world(rect.left(), rect.bottom()),
            self.to_world(rect.left(), rect.top()),
            self.to_world(rect.right(), rect.top()),
            self.to_world(rect.right(), rect.bottom()),
        ]
    }
}

impl WorldCorners for [Vec3; 4] {
    fn world_corners(&self) -> [Vec3; 4] {
        *self
    }
}
