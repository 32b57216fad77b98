//! Shared types for the sceneview core: resource handles and the frame clock.

pub mod clock;
pub mod types;

pub use clock::FrameClock;
pub use types::{ModelHandle, TextureHandle};

pub fn crate_info() -> &'static str {
    "sceneview-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
