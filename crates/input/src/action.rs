use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Discrete movement codes understood by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
}

/// Keys delivered by the windowing host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    /// Any key without a dedicated variant, by host scan code.
    Other(u32),
}

/// A high-level camera action produced from host input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Mouse movement since the last event, in host pixels.
    Look(Vec2),
    /// One step of directional movement.
    Move(Direction),
    /// Input with no binding.
    Noop,
}

/// Map a host key to its camera action.
pub fn map_key(code: KeyCode) -> Action {
    let direction = match code {
        KeyCode::W | KeyCode::Up => Direction::Forward,
        KeyCode::S | KeyCode::Down => Direction::Backward,
        KeyCode::A | KeyCode::Left => Direction::StrafeLeft,
        KeyCode::D | KeyCode::Right => Direction::StrafeRight,
        KeyCode::Other(scan) => {
            tracing::trace!(scan, "unbound key");
            return Action::Noop;
        }
    };
    Action::Move(direction)
}

impl KeyCode {
    /// Parse a single-key name such as `"w"` or `"left"`.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.to_ascii_lowercase().as_str() {
            "w" => KeyCode::W,
            "a" => KeyCode::A,
            "s" => KeyCode::S,
            "d" => KeyCode::D,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            _ => return None,
        };
        Some(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_maps_to_directions() {
        assert_eq!(map_key(KeyCode::W), Action::Move(Direction::Forward));
        assert_eq!(map_key(KeyCode::S), Action::Move(Direction::Backward));
        assert_eq!(map_key(KeyCode::A), Action::Move(Direction::StrafeLeft));
        assert_eq!(map_key(KeyCode::D), Action::Move(Direction::StrafeRight));
    }

    #[test]
    fn arrows_mirror_wasd() {
        assert_eq!(map_key(KeyCode::Up), map_key(KeyCode::W));
        assert_eq!(map_key(KeyCode::Down), map_key(KeyCode::S));
        assert_eq!(map_key(KeyCode::Left), map_key(KeyCode::A));
        assert_eq!(map_key(KeyCode::Right), map_key(KeyCode::D));
    }

    #[test]
    fn unbound_key_is_noop() {
        assert_eq!(map_key(KeyCode::Other(57)), Action::Noop);
    }

    #[test]
    fn key_names_parse() {
        assert_eq!(KeyCode::from_name("W"), Some(KeyCode::W));
        assert_eq!(KeyCode::from_name("left"), Some(KeyCode::Left));
        assert_eq!(KeyCode::from_name("space"), None);
    }
}
