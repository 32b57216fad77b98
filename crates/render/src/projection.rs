use crate::config::ConfigError;
use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Perspective projection parameters.
///
/// Defaults match an 800x600 viewport: 45 degree vertical field of view,
/// near plane 1.0 and far plane 100.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Width divided by height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            fov_y_degrees: 45.0,
            aspect: 800.0 / 600.0,
            near: 1.0,
            far: 100.0,
        }
    }
}

impl ProjectionConfig {
    /// Right-handed perspective matrix with OpenGL clip depth ([-1, 1]).
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Aspect ratio for a viewport, or `None` when either side is zero.
    pub fn aspect_for(width: u32, height: u32) -> Option<f32> {
        (width != 0 && height != 0).then(|| width as f32 / height as f32)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "fov_y_degrees must be in (0, 180), got {}",
                self.fov_y_degrees
            )));
        }
        if !(self.aspect > 0.0 && self.aspect.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "aspect must be positive and finite, got {}",
                self.aspect
            )));
        }
        if !(self.near > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "near must be positive, got {}",
                self.near
            )));
        }
        if !(self.far > self.near && self.far.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "far ({}) must be finite and exceed near ({})",
                self.far, self.near
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn default_values() {
        let p = ProjectionConfig::default();
        assert_eq!(p.fov_y_degrees, 45.0);
        assert_eq!(p.aspect, 800.0 / 600.0);
        assert_eq!(p.near, 1.0);
        assert_eq!(p.far, 100.0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn near_and_far_planes_map_to_clip_bounds() {
        let m = ProjectionConfig::default().matrix();
        let near = m.project_point3(Vec3::new(0.0, 0.0, -1.0));
        let far = m.project_point3(Vec3::new(0.0, 0.0, -100.0));
        assert!((near.z + 1.0).abs() < 1e-4);
        assert!((far.z - 1.0).abs() < 1e-4);
    }

    #[test]
    fn aspect_for_collapsed_viewport_is_none() {
        assert_eq!(ProjectionConfig::aspect_for(1920, 0), None);
        assert_eq!(ProjectionConfig::aspect_for(0, 600), None);
        assert_eq!(ProjectionConfig::aspect_for(0, 0), None);
        assert_eq!(ProjectionConfig::aspect_for(1600, 800), Some(2.0));
    }

    #[test]
    fn validate_rejects_bad_planes() {
        let p = ProjectionConfig {
            near: 10.0,
            far: 5.0,
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(ConfigError::Invalid(_))));

        let p = ProjectionConfig {
            near: 0.0,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn validate_rejects_infinite_values() {
        let p = ProjectionConfig {
            far: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(p.validate(), Err(ConfigError::Invalid(_))));

        let p = ProjectionConfig {
            aspect: f32::INFINITY,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn validate_rejects_nan_fov() {
        let p = ProjectionConfig {
            fov_y_degrees: f32::NAN,
            ..Default::default()
        };
        assert!(p.validate().is_err());
    }
}
