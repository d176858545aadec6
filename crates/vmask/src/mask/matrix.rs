use crate::{
    camera::OrthographicCamera,
    math::projections::{self, ClipSpace},
    primitives::Rect,
    Mat4,
};

/// Builds the matrix taking a world position to mask texture coordinates.
///
/// `rect` is the mask footprint in camera units as produced by
/// [`compute_viewport_rect`](super::compute_viewport_rect). Positions inside
/// the footprint land in [0, 1] on x and y. The depth row follows the
/// `clip_space` convention and carries no meaning for sampling.
pub fn compute_mask_matrix(
    rect: &Rect,
    camera: &OrthographicCamera,
    clip_space: ClipSpace,
) -> Mat4 {
    let center = rect.center();
    let half_size = rect.half_size();
    let projection = projections::ortho(
        center.x - half_size.x,
        center.x + half_size.x,
        center.y - half_size.y,
        center.y + half_size.y,
        camera.near,
        camera.far,
    );

    projections::texture_space()
        * projections::gpu_projection(projection, clip_space)
        * camera.world_to_camera
}
