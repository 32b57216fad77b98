//! Input mapping: host key codes and mouse deltas become camera actions.
//!
//! # Invariants
//! - The camera consumes actions, never raw host events.
//! - Unbound keys map to [`Action::Noop`] rather than an error.

pub mod action;

pub use action::{Action, Direction, KeyCode, map_key};

pub fn crate_info() -> &'static str {
    "sceneview-input v0.1.0"
}
