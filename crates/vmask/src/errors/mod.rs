pub use crate::errors::{camera::CameraError, mask::MaskError};

mod camera;
mod mask;
