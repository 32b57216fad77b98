use crate::config::{CameraConfig, ConfigError, MovementConfig};
use crate::projection::ProjectionConfig;
use glam::{Mat4, Vec2, Vec3};
use sceneview_input::{Action, Direction};
use sceneview_math::{
    WORLD_UP, XZ_PLANE, clamp, euler_rotation, forward_from_inverse, right_from_inverse,
};
use serde::{Deserialize, Serialize};

const PITCH_LIMIT: f32 = 90.0;

/// How the camera recovers its forward and right axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BasisStrategy {
    /// Invert the view matrix on every query and read its columns.
    /// Requires every scale component to be non-zero.
    #[default]
    InverseView,
    /// Keep a basis that is rebuilt from the rotation whenever the angles
    /// change. Independent of scale.
    CachedBasis,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Basis {
    forward: Vec3,
    right: Vec3,
}

impl Basis {
    fn from_angles(pitch_yaw_roll: Vec3) -> Self {
        // Columns of the inverse rotation are the rows of the rotation.
        let inverse = euler_rotation(pitch_yaw_roll).transpose();
        Self {
            forward: inverse.z_axis.truncate().normalize(),
            right: inverse.x_axis.truncate().normalize(),
        }
    }
}

/// Euler-angle camera: position, (pitch, yaw, roll) in degrees, and scale.
///
/// Angles accumulate from mouse input. Pitch is clamped to [-90, 90]; yaw and
/// roll are unbounded and wrap through the trigonometry.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub scale: Vec3,
    pitch_yaw_roll: Vec3,
    projection: ProjectionConfig,
    movement: MovementConfig,
    basis_strategy: BasisStrategy,
    basis: Basis,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self {
            position: config.position,
            scale: config.scale,
            pitch_yaw_roll: Vec3::ZERO,
            projection: config.projection,
            movement: config.movement,
            basis_strategy: config.basis_strategy,
            basis: Basis::from_angles(Vec3::ZERO),
        };
        camera.set_pitch_yaw_roll(config.pitch_yaw_roll);
        camera
    }

    /// Current (pitch, yaw, roll) in degrees.
    pub fn pitch_yaw_roll(&self) -> Vec3 {
        self.pitch_yaw_roll
    }

    /// Replace the Euler angles. Pitch is clamped.
    pub fn set_pitch_yaw_roll(&mut self, angles: Vec3) {
        self.pitch_yaw_roll = angles;
        self.pitch_yaw_roll.x = clamp(angles.x, -PITCH_LIMIT, PITCH_LIMIT);
        self.basis = Basis::from_angles(self.pitch_yaw_roll);
    }

    pub fn projection_config(&self) -> &ProjectionConfig {
        &self.projection
    }

    /// Install new projection parameters. Invalid parameters are rejected
    /// and the current projection is kept.
    pub fn set_projection(&mut self, projection: ProjectionConfig) -> Result<(), ConfigError> {
        projection.validate()?;
        self.projection = projection;
        Ok(())
    }

    pub fn movement(&self) -> &MovementConfig {
        &self.movement
    }

    pub fn set_movement(&mut self, movement: MovementConfig) {
        self.movement = movement;
    }

    pub fn basis_strategy(&self) -> BasisStrategy {
        self.basis_strategy
    }

    pub fn set_basis_strategy(&mut self, strategy: BasisStrategy) {
        self.basis_strategy = strategy;
    }

    /// Update the aspect ratio for a new viewport size.
    ///
    /// A collapsed viewport (either side zero) leaves the projection unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        match ProjectionConfig::aspect_for(width, height) {
            Some(aspect) => self.projection.aspect = aspect,
            None => tracing::warn!(width, height, "ignoring resize to collapsed viewport"),
        }
    }

    /// Camera placement in world space: `T(position) · S(scale) · Rz · Ry · Rx`.
    pub fn view(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_scale(self.scale)
            * euler_rotation(self.pitch_yaw_roll)
    }

    pub fn projection(&self) -> Mat4 {
        self.projection.matrix()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Unit forward axis in world space.
    ///
    /// With [`BasisStrategy::InverseView`] a zero scale component yields NaN.
    pub fn forward_vector(&self) -> Vec3 {
        match self.basis_strategy {
            BasisStrategy::InverseView => forward_from_inverse(self.view()),
            BasisStrategy::CachedBasis => self.basis.forward,
        }
    }

    /// Unit right axis in world space.
    pub fn right_vector(&self) -> Vec3 {
        match self.basis_strategy {
            BasisStrategy::InverseView => right_from_inverse(self.view()),
            BasisStrategy::CachedBasis => self.basis.right,
        }
    }

    /// Always world up; roll does not tilt it.
    pub fn up_vector(&self) -> Vec3 {
        WORLD_UP
    }

    /// Accumulate mouse movement: y drives pitch, x drives yaw.
    pub fn update_rotation(&mut self, mouse_delta: Vec2) {
        let sensitivity = self.movement.sensitivity;
        let mut angles = self.pitch_yaw_roll;
        angles.x += mouse_delta.y * sensitivity;
        angles.y += mouse_delta.x * sensitivity;
        self.set_pitch_yaw_roll(angles);
    }

    /// Move along the ground plane for `dt` seconds.
    ///
    /// The vertical component is masked out, so altitude never changes.
    pub fn handle_directional_input(&mut self, direction: Direction, dt: f32) {
        let step = self.movement.speed * XZ_PLANE * dt;
        match direction {
            Direction::Forward => self.position += self.forward_vector() * step,
            Direction::Backward => self.position -= self.forward_vector() * step,
            Direction::StrafeLeft => self.position += self.right_vector() * step,
            Direction::StrafeRight => self.position -= self.right_vector() * step,
        }
    }

    /// Apply one input action.
    pub fn apply(&mut self, action: Action, dt: f32) {
        match action {
            Action::Look(delta) => self.update_rotation(delta),
            Action::Move(direction) => self.handle_directional_input(direction, dt),
            Action::Noop => {}
        }
    }
}
