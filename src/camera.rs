//! Camera placement and world-to-screen projection.
//!
//! The camera holds only the current view matrix. There is no perspective
//! term: view-space x/y are assumed to land roughly in `[-0.5, 0.5]` and
//! are mapped linearly onto the pixel grid. Points outside that range
//! project off the buffer and are dropped by the frame buffer's bounds
//! check, so no clipping happens here.

use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

pub struct Camera {
    view: Mat4,
}

impl Camera {
    /// Creates a camera with an identity view (world space = view space).
    pub fn new() -> Self {
        Self {
            view: Mat4::identity(),
        }
    }

    /// Rebuilds the view matrix from camera placement.
    ///
    /// Called once per frame by the driver; the previous matrix is
    /// replaced wholesale, never edited.
    pub fn update_view(&mut self, eye: Vec3, focus: Vec3, up: Vec3) {
        self.view = Mat4::look_at(eye, focus, up);
    }

    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    /// Projects a world-space point to pixel coordinates.
    ///
    /// The point is lifted to homogeneous coordinates (w=1), transformed by
    /// the view matrix, then mapped so view-space x/y of -0.5 and 0.5 land
    /// on the buffer edges.
    pub fn project(&self, world: Vec3, width: u32, height: u32) -> Vec2 {
        let p = self.view * Vec4::from(world);
        Vec2::new(width as f32 * (p.x + 0.5), height as f32 * (p.y + 0.5))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn focus_projects_to_buffer_center() {
        let mut camera = Camera::new();
        camera.update_view(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
        );
        let screen = camera.project(Vec3::ZERO, 800, 600);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-3);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-3);
    }

    #[test]
    fn identity_view_maps_unit_square_to_buffer() {
        let camera = Camera::new();
        let top_left = camera.project(Vec3::new(-0.5, -0.5, 0.0), 640, 480);
        let bottom_right = camera.project(Vec3::new(0.5, 0.5, 0.0), 640, 480);
        assert_relative_eq!(top_left.x, 0.0);
        assert_relative_eq!(top_left.y, 0.0);
        assert_relative_eq!(bottom_right.x, 640.0);
        assert_relative_eq!(bottom_right.y, 480.0);
    }

    #[test]
    fn points_off_the_view_axis_move_off_center() {
        let mut camera = Camera::new();
        camera.update_view(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
        );
        let center = camera.project(Vec3::ZERO, 800, 600);
        let shifted = camera.project(Vec3::new(0.1, 0.0, 0.0), 800, 600);
        assert!((shifted.x - center.x).abs() > 1.0);
        assert_relative_eq!(shifted.y, center.y, epsilon = 1e-3);
    }
}
