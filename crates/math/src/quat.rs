//! Quaternion helpers.

use glam::{Mat4, Quat, Vec3};

/// Convert a unit quaternion into a rotation matrix.
///
/// Built as the product of the quaternion's left- and right-multiplication
/// matrices. The two factors commute, and for a unit quaternion the product is
/// the usual rotation matrix with `w_axis = (0, 0, 0, 1)`.
pub fn quat_to_matrix_full(q: Quat) -> Mat4 {
    sandwich(q.x, q.y, q.z, q.w)
}

/// Same construction as [`quat_to_matrix_full`] with the z component dropped.
///
/// The quaternion is not renormalised after z is zeroed, so for input where z
/// carries weight the result is uniformly scaled or skewed rather than a pure
/// rotation. Callers relying on that shape must keep it that way.
pub fn quat_to_matrix_no_roll(q: Quat) -> Mat4 {
    sandwich(q.x, q.y, 0.0, q.w)
}

fn sandwich(x: f32, y: f32, z: f32, w: f32) -> Mat4 {
    let left = Mat4::from_cols_array_2d(&[
        [w, z, -y, x],
        [-z, w, x, y],
        [y, -x, w, z],
        [-x, -y, -z, w],
    ]);
    let right = Mat4::from_cols_array_2d(&[
        [w, z, -y, -x],
        [-z, w, x, -y],
        [y, -x, w, -z],
        [x, y, z, w],
    ]);
    left * right
}

/// Rotate `v` by `q` without going through a matrix.
///
/// Computes `v + 2w(q.xyz × v) + 2(q.xyz × (q.xyz × v))`.
pub fn rotate_vector_by_quaternion(v: Vec3, q: Quat) -> Vec3 {
    let axis = Vec3::new(q.x, q.y, q.z);
    let cross = axis.cross(v);
    v + 2.0 * q.w * cross + 2.0 * axis.cross(cross)
}
