use crate::{
    builder_field, builder_field_into,
    errors::CameraError,
    math::projections,
    primitives::Dimensions,
    vec2, vec4, Mat4, Vec2, Vec3,
};

const DEFAULT_NEAR: f32 = 0.3;
const DEFAULT_FAR: f32 = 1000.0;

/// Everything the mask needs to know about the camera rendering a canvas.
///
/// Camera space is right handed and the camera looks down -Z. A snapshot is
/// taken from the host every tick; nothing here is cached.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrthographicCamera {
    pub world_to_camera: Mat4,
    pub near: f32,
    pub far: f32,
    /// Half of the vertical extent of the view volume, in world units.
    pub orthographic_size: f32,
    pub viewport: Dimensions,
}

impl OrthographicCamera {
    pub fn new(world_to_camera: Mat4, orthographic_size: f32, viewport: Dimensions) -> Self {
        Self {
            world_to_camera,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            orthographic_size,
            viewport,
        }
    }

    /// A camera at `position` looking along world +Z with +Y up.
    pub fn looking_forward(position: Vec3, orthographic_size: f32, viewport: Dimensions) -> Self {
        let flip_z = Mat4::new_nonuniform_scaling(&Vec3::new(1.0, 1.0, -1.0));
        let world_to_camera = flip_z * Mat4::new_translation(&-position);
        Self::new(world_to_camera, orthographic_size, viewport)
    }

    builder_field!(near, f32);
    builder_field!(far, f32);
    builder_field!(orthographic_size, f32);
    builder_field_into!(viewport, Dimensions);

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.viewport.aspect_ratio()
    }

    /// Half of the horizontal extent of the view volume, in world units.
    #[inline]
    pub fn half_width(&self) -> f32 {
        self.orthographic_size * self.aspect()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        let half_width = self.half_width();
        projections::ortho(
            -half_width,
            half_width,
            -self.orthographic_size,
            self.orthographic_size,
            self.near,
            self.far,
        )
    }

    /// Projects a world space point to viewport pixels, origin at the bottom
    /// left, Y up.
    pub fn world_to_screen(&self, point: Vec3) -> Vec2 {
        let clip = self.projection_matrix()
            * self.world_to_camera
            * vec4(point.x, point.y, point.z, 1.0);
        let ndc = vec2(clip.x / clip.w, clip.y / clip.w);
        vec2(
            (ndc.x + 1.0) * 0.5 * self.viewport.width,
            (ndc.y + 1.0) * 0.5 * self.viewport.height,
        )
    }

    /// Rejects cameras whose projection would divide by zero or produce
    /// non-finite values.
    pub fn validate(&self) -> Result<(), CameraError> {
        let finite = self.world_to_camera.iter().all(|value| value.is_finite())
            && self.near.is_finite()
            && self.far.is_finite()
            && self.orthographic_size.is_finite()
            && self.viewport.width.is_finite()
            && self.viewport.height.is_finite();
        if !finite {
            return Err(CameraError::NonFinite);
        }

        if !self.viewport.has_area() {
            return Err(CameraError::ZeroViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if self.orthographic_size <= 0.0 {
            return Err(CameraError::NonPositiveOrthographicSize(self.orthographic_size));
        }

        if self.near == self.far {
            return Err(CameraError::DegenerateClipPlanes { near: self.near, far: self.far });
        }

        Ok(())
    }
}
