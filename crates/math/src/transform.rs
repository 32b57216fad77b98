//! Matrix helpers: homogeneous transforms, Euler composition, basis extraction.

use glam::{Mat4, Vec3};

/// Columns of an inverted local-to-world matrix that carry a basis axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisAxis {
    Right,
    Up,
    Forward,
}

impl BasisAxis {
    pub fn column(self) -> usize {
        match self {
            BasisAxis::Right => 0,
            BasisAxis::Up => 1,
            BasisAxis::Forward => 2,
        }
    }
}

/// Transform `point` as a homogeneous position (w = 1) and divide by the
/// resulting w.
///
/// A matrix that maps the point to w = 0 produces inf/NaN components.
pub fn perspective_divide_transform(matrix: Mat4, point: Vec3) -> Vec3 {
    let h = matrix * point.extend(1.0);
    h.truncate() / h.w
}

/// Rotation for Euler angles given in degrees as (pitch, yaw, roll).
///
/// Composed as `Rz(roll) · Ry(yaw) · Rx(pitch)`, so pitch is applied first.
pub fn euler_rotation(pitch_yaw_roll: Vec3) -> Mat4 {
    Mat4::from_rotation_z(pitch_yaw_roll.z.to_radians())
        * Mat4::from_rotation_y(pitch_yaw_roll.y.to_radians())
        * Mat4::from_rotation_x(pitch_yaw_roll.x.to_radians())
}

/// Read `axis` from the inverse of `matrix` and normalize it.
///
/// Singular matrices produce NaN.
pub fn inverse_basis_column(matrix: Mat4, axis: BasisAxis) -> Vec3 {
    matrix.inverse().col(axis.column()).truncate().normalize()
}

pub fn forward_from_inverse(matrix: Mat4) -> Vec3 {
    inverse_basis_column(matrix, BasisAxis::Forward)
}

pub fn right_from_inverse(matrix: Mat4) -> Vec3 {
    inverse_basis_column(matrix, BasisAxis::Right)
}
