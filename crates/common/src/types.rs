use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a model registered with a model registry.
///
/// Handles are allocated from a monotonically increasing counter and are never
/// reused, even after the model they named has been deregistered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModelHandle(pub u64);

impl ModelHandle {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "model#{}", self.0)
    }
}

/// Graphics-API texture name as handed back by a texture loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextureHandle(pub u32);

impl fmt::Display for TextureHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "texture#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_handles_order_by_value() {
        let a = ModelHandle(1);
        let b = ModelHandle(2);
        assert!(a < b);
        assert_eq!(a.get(), 1);
    }

    #[test]
    fn handle_display() {
        assert_eq!(ModelHandle(7).to_string(), "model#7");
        assert_eq!(TextureHandle(3).to_string(), "texture#3");
    }
}
