//! Human input mapping
//!
//! A windowing layer translates its key events into [`Key`] values and feeds
//! them to an [`InputLatch`]; once per tick the game loop polls the latch for
//! the action to pass to `step`.

use serde::{Deserialize, Serialize};

use crate::sim::Action;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Space bar
    Jump,
    /// Down arrow
    Duck,
    /// Anything else
    Other,
}

impl Key {
    /// Map a key name as reported by common windowing/terminal libraries
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            " " | "space" => Key::Jump,
            "down" | "arrowdown" => Key::Duck,
            _ => Key::Other,
        }
    }

    pub fn action(self) -> Action {
        match self {
            Key::Jump => Action::Jump,
            Key::Duck => Action::Duck,
            Key::Other => Action::Noop,
        }
    }
}

/// Collects key presses between ticks
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pending: Option<Key>,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press; the last press before a poll wins
    pub fn press(&mut self, key: Key) {
        self.pending = Some(key);
    }

    /// Action for this tick; clears the latch
    pub fn poll(&mut self) -> Action {
        self.pending.take().map(Key::action).unwrap_or_default()
    }
}
