pub mod projections {
    use crate::{vec3, Mat4};

    /// Normalized device coordinate conventions for the depth axis.
    ///
    /// Projection matrices in this crate are built in the OpenGL convention
    /// (z in [-1, 1]); [`gpu_projection`] converts them to whatever the
    /// target graphics API expects.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
    pub enum ClipSpace {
        /// z in [-1, 1]. No correction needed.
        #[default]
        OpenGl,

        /// z in [0, 1] (Vulkan, Metal and D3D without reversed depth).
        ZeroToOne,

        /// z in [1, 0], near plane at 1.
        ReversedZ,
    }

    /// Right-handed orthographic projection, camera looking down -Z, mapping
    /// the box into the OpenGL clip volume.
    pub fn ortho(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        near: f32,
        far: f32,
    ) -> Mat4 {
        let mh = 2.0 / (right - left);
        let bh = (right + left) / (left - right);
        let mv = 2.0 / (top - bottom);
        let bv = (top + bottom) / (bottom - top);
        let mz = -2.0 / (far - near);
        let bz = (far + near) / (near - far);
        Mat4::new(
            mh, 0.0, 0.0, bh, //
            0.0, mv, 0.0, bv, //
            0.0, 0.0, mz, bz, //
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Adjusts an OpenGL style projection for a non render texture target
    /// using the depth convention of the graphics API.
    pub fn gpu_projection(projection: Mat4, clip_space: ClipSpace) -> Mat4 {
        let correction = match clip_space {
            ClipSpace::OpenGl => return projection,
            ClipSpace::ZeroToOne => Mat4::new(
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 0.5, 0.5, //
                0.0, 0.0, 0.0, 1.0,
            ),
            ClipSpace::ReversedZ => Mat4::new(
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, -0.5, 0.5, //
                0.0, 0.0, 0.0, 1.0,
            ),
        };
        correction * projection
    }

    /// Remaps clip space [-1, 1] into texture sampling space [0, 1].
    pub fn texture_space() -> Mat4 {
        Mat4::new_translation(&vec3(0.5, 0.5, 0.5)) * Mat4::new_scaling(0.5)
    }

}
