//! Keyboard polling: held keys are tracked by `KeyboardEvent.key` name and
//! turned into a movement intent once per frame.

use std::collections::HashSet;

const LEFT_KEYS: [&str; 2] = ["a", "ArrowLeft"];
const RIGHT_KEYS: [&str; 2] = ["d", "ArrowRight"];
const UP_KEYS: [&str; 2] = ["w", "ArrowUp"];
const DOWN_KEYS: [&str; 2] = ["s", "ArrowDown"];

/// Per-axis movement direction, each component in {-1, 0, 1}.
///
/// Diagonals are not normalized: holding right+down moves `speed` on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    pub dx: i8,
    pub dy: i8,
}

impl Intent {
    pub const NONE: Intent = Intent { dx: 0, dy: 0 };
    pub const RIGHT: Intent = Intent { dx: 1, dy: 0 };
    pub const LEFT: Intent = Intent { dx: -1, dy: 0 };
    pub const UP: Intent = Intent { dx: 0, dy: -1 };
    pub const DOWN: Intent = Intent { dx: 0, dy: 1 };

    pub fn is_idle(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

/// Set of currently held keys.
#[derive(Debug, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        if !self.held.contains(key) {
            self.held.insert(key.to_string());
        }
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|k| self.held.contains(*k))
    }

    /// Movement intent for this frame. When both directions of an axis are
    /// held, right and down win.
    pub fn intent(&self) -> Intent {
        let mut intent = Intent::NONE;
        if self.any_held(&LEFT_KEYS) {
            intent.dx = -1;
        }
        if self.any_held(&RIGHT_KEYS) {
            intent.dx = 1;
        }
        if self.any_held(&UP_KEYS) {
            intent.dy = -1;
        }
        if self.any_held(&DOWN_KEYS) {
            intent.dy = 1;
        }
        intent
    }
}
