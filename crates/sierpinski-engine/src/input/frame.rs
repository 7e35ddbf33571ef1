use std::collections::HashSet;

use super::types::Key;

/// Key transitions seen since the last frame.
///
/// `InputState` holds what is down; `InputFrame` holds what went down during
/// the current frame and is cleared once the frame is consumed.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub keys_pressed: HashSet<Key>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
    }

    /// Returns `true` if `key` went down during this frame.
    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
