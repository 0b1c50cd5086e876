//! Keyboard input: keys, discrete events and held-key state

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    Backspace,
    Space,
    Char(char),
}

/// Discrete input events drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Window close / interrupt request
    Quit,
}

/// Keys currently held down
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}

impl FromIterator<Key> for KeyState {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            held: iter.into_iter().collect(),
        }
    }
}

/// Up/down bindings for one human paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: Key,
    pub down: Key,
}

impl KeyBindings {
    pub const ARROWS: KeyBindings = KeyBindings {
        up: Key::Up,
        down: Key::Down,
    };

    pub const WS: KeyBindings = KeyBindings {
        up: Key::Char('w'),
        down: Key::Char('s'),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_state_press_release() {
        let mut keys = KeyState::new();
        keys.press(Key::Up);
        assert!(keys.is_pressed(Key::Up));
        assert!(!keys.is_pressed(Key::Down));
        keys.release(Key::Up);
        assert!(!keys.is_pressed(Key::Up));
    }

    #[test]
    fn test_key_state_from_iter() {
        let keys: KeyState = [Key::Char('w'), Key::Down].into_iter().collect();
        assert!(keys.is_pressed(Key::Char('w')));
        assert!(keys.is_pressed(Key::Down));
    }
}
