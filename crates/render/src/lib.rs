//! Camera and per-frame render context.
//!
//! The camera is driven by Euler angles in degrees and composes its view
//! matrix as `T · S · Rz · Ry · Rx`. A [`RenderContext`] ties one frame
//! together: input actions mutate the camera, the camera produces uniforms,
//! and the model registry draws.
//!
//! # Invariants
//! - Camera pitch stays within [-90, 90] degrees after every mutation.
//! - The render context never mutates the model registry.

mod camera;
mod config;
mod frame;
mod projection;
mod uniforms;

pub use camera::{BasisStrategy, Camera};
pub use config::{CameraConfig, ConfigError, MovementConfig};
pub use frame::{FrameStats, RenderContext};
pub use projection::ProjectionConfig;
pub use uniforms::CameraUniforms;

pub fn crate_info() -> &'static str {
    "sceneview-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
