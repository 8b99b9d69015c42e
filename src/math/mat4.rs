//! 4x4 view transform matrix.
//!
//! # Convention
//! - Storage is `data[row][col]`
//! - Vectors are **column vectors** on the right: `Mat4 * Vec4`
//! - `look_at` packs the camera basis axes as **rows**, with the
//!   `-dot(axis, eye)` translation terms in the last column
//!
//! The matrix only ever holds a view transform (a basis change with
//! translation, no perspective term). It is rebuilt from camera parameters
//! each frame and never mutated in place.

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a view matrix from camera placement.
    ///
    /// # Arguments
    ///
    /// * `eye` - The position of the camera.
    /// * `focus` - The point the camera is looking at.
    /// * `up` - The up direction of the camera.
    ///
    /// The basis is orthonormal: forward toward `focus`, right from
    /// `up x forward`, and a recomputed true up. `eye == focus` or a zero
    /// `up` produces NaN axes (degenerate input, not validated here).
    pub fn look_at(eye: Vec3, focus: Vec3, up: Vec3) -> Self {
        let forward = (focus - eye).normalize();
        let right = up.cross(forward).normalize();
        let up = forward.cross(right);

        // Basis axes as rows, translation as -dot(axis, eye) per axis
        Self::new([
            [right.x, right.y, right.z, -right.dot(eye)],
            [up.x, up.y, up.z, -up.dot(eye)],
            [forward.x, forward.y, forward.z, -forward.dot(eye)],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row][col]
    }
}

/// Transform a Vec4 by a matrix: Mat4 * Vec4 (column vector).
impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Self::Output {
        Vec4::new(
            self.data[0][0] * v.x
                + self.data[0][1] * v.y
                + self.data[0][2] * v.z
                + self.data[0][3] * v.w,
            self.data[1][0] * v.x
                + self.data[1][1] * v.y
                + self.data[1][2] * v.z
                + self.data[1][3] * v.w,
            self.data[2][0] * v.x
                + self.data[2][1] * v.y
                + self.data[2][2] * v.z
                + self.data[2][3] * v.w,
            self.data[3][0] * v.x
                + self.data[3][1] * v.y
                + self.data[3][2] * v.z
                + self.data[3][3] * v.w,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_transform_is_a_no_op() {
        let v = Vec4::new(1.5, -2.0, 3.25, 1.0);
        assert_eq!(Mat4::identity() * v, v);
    }

    #[test]
    fn look_at_maps_focus_onto_view_axis() {
        // Camera 5 units up the z axis looking back at the origin: the focus
        // point must land on the view-space forward axis, centered in x/y.
        let view = Mat4::look_at(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
        );
        let p = view * Vec4::point(0.0, 0.0, 0.0);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 5.0, epsilon = 1e-6);
        assert_relative_eq!(p.w, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn look_at_basis_is_orthonormal() {
        let view = Mat4::look_at(
            Vec3::new(2.0, -1.0, 3.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        );
        let row = |r: usize| Vec3::new(view.get(r, 0), view.get(r, 1), view.get(r, 2));
        for r in 0..3 {
            assert_relative_eq!(row(r).magnitude(), 1.0, epsilon = 1e-5);
        }
        assert_relative_eq!(row(0).dot(row(1)), 0.0, epsilon = 1e-5);
        assert_relative_eq!(row(1).dot(row(2)), 0.0, epsilon = 1e-5);
        assert_relative_eq!(row(0).dot(row(2)), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn look_at_translation_cancels_eye() {
        // The eye itself must map to the view-space origin.
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let p = view * Vec4::from(eye);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);
    }
}
