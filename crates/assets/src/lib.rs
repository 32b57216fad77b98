//! Resource registries: models with draw dispatch, textures memoized by path.
//!
//! Both registries are plain owned values. A render loop holds them and passes
//! references into each frame; nothing here is process-global.
//!
//! # Invariants
//! - Model handles increase monotonically and are never reused.
//! - A texture path maps to at most one handle/object pair, for the cache's lifetime.

mod model_registry;
mod texture_cache;

pub use model_registry::{Drawable, ModelRegistry};
pub use texture_cache::{CachedTexture, LoadedTexture, TextureCache, TextureLoader};

/// Errors from asset loading.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to load {path}: {reason}")]
    Load { path: String, reason: String },
}

pub fn crate_info() -> &'static str {
    "sceneview-assets v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("assets"));
    }

    #[test]
    fn load_error_names_path() {
        let err = AssetError::Load {
            path: "brick.png".into(),
            reason: "truncated header".into(),
        };
        assert_eq!(err.to_string(), "failed to load brick.png: truncated header");
    }
}
