mod controller;
mod discovery;
#[cfg(test)]
mod fixtures;
mod matrix;
mod settings;
mod viewport_rect;

pub use self::{
    controller::{AlphaMask, MaskContext},
    discovery::{bind_material, discover_targets},
    matrix::compute_mask_matrix,
    settings::MaskSettings,
    viewport_rect::{compute_viewport_rect, viewport_rect_from_screen_points},
};
