use crate::{
    camera::OrthographicCamera,
    errors::CameraError,
    primitives::{Corner, Rect, WorldCorners},
    Vec2,
};

/// Footprint of a rectangle on screen, in camera units, relative to the
/// center of the viewport.
///
/// Only the top left and bottom right corners are projected, so rotated
/// rectangles collapse to the box spanned by those two points.
pub fn compute_viewport_rect(
    source: &impl WorldCorners,
    camera: &OrthographicCamera,
) -> Result<Rect, CameraError> {
    camera.validate()?;

    let corners = source.world_corners();
    let top_left = camera.world_to_screen(corners[Corner::TopLeft.index()]);
    let bottom_right = camera.world_to_screen(corners[Corner::BottomRight.index()]);

    Ok(screen_points_to_rect(top_left, bottom_right, camera))
}

/// Converts two pixel positions (origin bottom left, Y up) into the camera
/// unit rectangle they span.
///
/// The result is not clamped: a rect reaching past the screen edge extends
/// past the view volume.
pub fn viewport_rect_from_screen_points(
    top_left: Vec2,
    bottom_right: Vec2,
    camera: &OrthographicCamera,
) -> Result<Rect, CameraError> {
    camera.validate()?;
    Ok(screen_points_to_rect(top_left, bottom_right, camera))
}

/// Expects a validated camera.
fn screen_points_to_rect(top_left: Vec2, bottom_right: Vec2, camera: &OrthographicCamera) -> Rect {
    let half_screen = camera.viewport.half();
    let left = (top_left.x - half_screen.x) / half_screen.x;
    let bottom = (bottom_right.y - half_screen.y) / half_screen.y;
    let width = (bottom_right.x - top_left.x) / half_screen.x;
    let height = (top_left.y - bottom_right.y) / half_screen.y;

    Rect::new(left, bottom, width, height).scale(camera.half_width(), camera.orthographic_size)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{primitives::{Dimensions, RectTransform}, vec2, vec3};

    fn camera(orthographic_size: f32) -> OrthographicCamera {
        OrthographicCamera::looking_forward(
            vec3(0.0, 0.0, -10.0),
            orthographic_size,
            Dimensions::new(1920.0, 1080.0),
        )
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!((actual - expected).abs() < 1e-4, "expected {expected} but found {actual}");
    }

    fn assert_rect_close(actual: Rect, expected: Rect) {
        assert_close(actual.x, expected.x);
        assert_close(actual.y, expected.y);
        assert_close(actual.width, expected.width);
        assert_close(actual.height, expected.height);
    }

    #[test]
    fn test_centered_rect_is_centered() {
        let source = RectTransform::at(vec3(0.0, 0.0, 0.0), vec2(4.0, 2.0), vec2(0.5, 0.5));
        let rect = compute_viewport_rect(&source, &camera(5.0)).unwrap();

        assert_close(rect.center().x, 0.0);
        assert_close(rect.center().y, 0.0);
        assert_rect_close(rect, Rect::new(-2.0, -1.0, 4.0, 2.0));
    }

    #[test]
    fn test_left_half_of_screen() {
        let half_width = camera(5.0).half_width();
        let source = RectTransform::at(
            vec3(-0.5 * half_width, 0.0, 0.0),
            vec2(half_width, 10.0),
            vec2(0.5, 0.5),
        );

        let rect = compute_viewport_rect(&source, &camera(5.0)).unwrap();

        assert_rect_close(rect, Rect::new(-80.0 / 9.0, -5.0, 80.0 / 9.0, 10.0));
    }

    #[test]
    fn test_screen_points() {
        let rect = viewport_rect_from_screen_points(
            vec2(0.0, 1080.0),
            vec2(960.0, 0.0),
            &camera(5.0),
        )
        .unwrap();

        assert_rect_close(rect, Rect::new(-80.0 / 9.0, -5.0, 80.0 / 9.0, 10.0));
    }

    #[test]
    fn test_scales_with_orthographic_size() {
        let top_left = vec2(480.0, 810.0);
        let bottom_right = vec2(1440.0, 270.0);

        let near = viewport_rect_from_screen_points(top_left, bottom_right, &camera(5.0)).unwrap();
        let far = viewport_rect_from_screen_points(top_left, bottom_right, &camera(15.0)).unwrap();

        assert_rect_close(near, Rect::new(-40.0 / 9.0, -2.5, 80.0 / 9.0, 5.0));
        assert_rect_close(far, near.scale(3.0, 3.0));
    }

    #[test]
    fn test_not_clamped_to_screen() {
        let rect = viewport_rect_from_screen_points(
            vec2(-960.0, 1620.0),
            vec2(2880.0, -540.0),
            &camera(5.0),
        )
        .unwrap();

        assert_rect_close(rect, Rect::new(-160.0 / 9.0, -10.0, 320.0 / 9.0, 20.0));
    }

    #[test]
    fn test_canvas_scale_moves_footprint() {
        let source = RectTransform::at(vec3(2.0, 1.0, 0.0), vec2(4.0, 2.0), vec2(0.0, 0.0));

        let rect = compute_viewport_rect(&source.scaled(0.5), &camera(5.0)).unwrap();

        assert_rect_close(rect, Rect::new(2.0, 1.0, 2.0, 1.0));
    }

    #[test]
    fn test_degenerate_camera_is_rejected() {
        let source = RectTransform::at(vec3(0.0, 0.0, 0.0), vec2(4.0, 2.0), vec2(0.5, 0.5));

        assert_eq!(
            compute_viewport_rect(&source, &camera(0.0)),
            Err(CameraError::NonPositiveOrthographicSize(0.0))
        );
        assert_eq!(
            compute_viewport_rect(&source, &camera(5.0).viewport(Dimensions::new(0.0, 0.0))),
            Err(CameraError::ZeroViewport { width: 0.0, height: 0.0 })
        );
    }
}
