use crate::camera::BasisStrategy;
use crate::projection::ProjectionConfig;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors from loading or validating camera configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Movement tuning for directional input and mouse look.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Units per second for directional movement.
    pub speed: f32,
    /// Degrees of rotation per unit of mouse delta.
    pub sensitivity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 100.0,
            sensitivity: 0.05,
        }
    }
}

/// Initial camera state and tuning, loadable from JSON.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Euler angles in degrees: (pitch, yaw, roll).
    pub pitch_yaw_roll: Vec3,
    pub scale: Vec3,
    pub projection: ProjectionConfig,
    pub movement: MovementConfig,
    pub basis_strategy: BasisStrategy,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -5.0),
            pitch_yaw_roll: Vec3::ZERO,
            scale: Vec3::ONE,
            projection: ProjectionConfig::default(),
            movement: MovementConfig::default(),
            basis_strategy: BasisStrategy::default(),
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.projection.validate()?;
        if !self.position.is_finite()
            || !self.pitch_yaw_roll.is_finite()
            || !self.scale.is_finite()
        {
            return Err(ConfigError::Invalid("camera pose must be finite".into()));
        }
        if self.basis_strategy == BasisStrategy::InverseView
            && self.scale.cmpeq(Vec3::ZERO).any()
        {
            return Err(ConfigError::Invalid(format!(
                "scale {} has a zero component; the view matrix would be singular",
                self.scale
            )));
        }
        if !(self.movement.speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "speed must be non-negative, got {}",
                self.movement.speed
            )));
        }
        Ok(())
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "loaded camera config");
        Ok(config)
    }

    /// Save the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = CameraConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.movement.speed, 100.0);
        assert_eq!(config.movement.sensitivity, 0.05);
    }

    #[test]
    fn save_and_load() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let config = CameraConfig {
            position: Vec3::new(1.0, 2.0, 3.0),
            basis_strategy: BasisStrategy::CachedBasis,
            ..Default::default()
        };
        config.save(tmp.path()).unwrap();

        let loaded = CameraConfig::load(tmp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let config: CameraConfig =
            serde_json::from_str(r#"{ "projection": { "aspect": 2.0 } }"#).unwrap();
        assert_eq!(config.projection.aspect, 2.0);
        assert_eq!(config.projection.fov_y_degrees, 45.0);
        assert_eq!(config.position, Vec3::new(0.0, 0.0, -5.0));
    }

    #[test]
    fn zero_scale_rejected_for_inverse_view() {
        let config = CameraConfig {
            scale: Vec3::new(1.0, 0.0, 1.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let cached = CameraConfig {
            basis_strategy: BasisStrategy::CachedBasis,
            ..config
        };
        assert!(cached.validate().is_ok());
    }

    #[test]
    fn non_finite_scale_rejected() {
        let config = CameraConfig {
            scale: Vec3::new(1.0, f32::INFINITY, 1.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = CameraConfig {
            scale: Vec3::new(f32::NAN, 1.0, 1.0),
            basis_strategy: BasisStrategy::CachedBasis,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_rejects_malformed_json() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "{ not json").unwrap();
        assert!(matches!(CameraConfig::load(tmp.path()), Err(ConfigError::Json(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("camera.json");
        assert!(matches!(CameraConfig::load(missing), Err(ConfigError::Io(_))));
    }
}
