//! Transform math for the camera core.
//!
//! Pure functions over `glam` value types: homogeneous point transforms,
//! quaternion to matrix conversions, quaternion vector rotation, scalar clamp
//! and basis extraction from inverted transforms.
//!
//! # Invariants
//! - No function here holds state or has side effects.
//! - Degenerate input (w = 0, singular matrices) yields inf/NaN; nothing is trapped.

pub mod quat;
pub mod transform;

pub use quat::{quat_to_matrix_full, quat_to_matrix_no_roll, rotate_vector_by_quaternion};
pub use transform::{
    BasisAxis, euler_rotation, forward_from_inverse, inverse_basis_column,
    perspective_divide_transform, right_from_inverse,
};

use glam::Vec3;

/// Mask that zeroes the vertical component of a vector.
pub const XZ_PLANE: Vec3 = Vec3::new(1.0, 0.0, 1.0);

/// The world's up axis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Clamp `x` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: when `min > max` the lower bound
/// is checked first and wins.
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x < min {
        return min;
    }
    if x > max {
        return max;
    }
    x
}
