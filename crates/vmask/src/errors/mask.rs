use ::thiserror::Error;

use crate::errors::CameraError;

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("No canvas was found on the mask node or any of its ancestors")]
    NoRootCanvas,

    #[error("The root canvas renders in overlay mode, which has no camera")]
    OverlayRenderMode,

    #[error("The root canvas has no camera assigned")]
    MissingCamera,

    #[error("The mask node has no mask image assigned")]
    MissingMaskImage,

    #[error("The mask node has no rect transform")]
    MissingRectTransform,

    #[error("The mask covers no area on screen")]
    EmptyMaskRect,

    #[error("The mask footprint or matrix is not finite")]
    NonFiniteMask,

    #[error("The camera can not be used to project the mask")]
    DegenerateCamera(#[from] CameraError),

    #[error("The host was unable to bind the mask material")]
    MaterialBinding(#[from] anyhow::Error),

    #[error("The mask has been destroyed")]
    Destroyed,
}
