use ::thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CameraError {
    #[error("The camera viewport has no area ({width}x{height} pixels)")]
    ZeroViewport { width: f32, height: f32 },

    #[error("The orthographic size must be positive, found {}", .0)]
    NonPositiveOrthographicSize(f32),

    #[error("The near and far clip planes coincide (near: {near}, far: {far})")]
    DegenerateClipPlanes { near: f32, far: f32 },

    #[error("The camera has a non-finite parameter")]
    NonFinite,
}
