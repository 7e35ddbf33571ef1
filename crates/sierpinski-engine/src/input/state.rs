use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
///
/// Holds "is down" information. Per-frame transitions are recorded into an
/// `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and records
    /// new presses in `frame`.
    ///
    /// A press only counts once until the key is released again, so key
    /// repeats never show up as fresh transitions.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Release everything on focus loss; the matching key-up never arrives.
                    self.keys_down.clear();
                }
            }

            InputEvent::Key { key, state: KeyState::Pressed, .. } => {
                if self.keys_down.insert(key) {
                    frame.keys_pressed.insert(key);
                }
            }

            InputEvent::Key { key, state: KeyState::Released, .. } => {
                self.keys_down.remove(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_marks_key_down_and_pressed() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));

        assert!(state.keys_down.contains(&Key::Escape));
        assert!(frame.pressed(Key::Escape));
    }

    #[test]
    fn repeat_press_is_not_a_new_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        frame.clear();
        state.apply_event(&mut frame, InputEvent::Key {
            key: Key::Escape,
            state: KeyState::Pressed,
            repeat: true,
        });

        assert!(state.keys_down.contains(&Key::Escape));
        assert!(!frame.pressed(Key::Escape));
    }

    #[test]
    fn release_clears_key() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Unknown, KeyState::Pressed));
        state.apply_event(&mut frame, key(Key::Unknown, KeyState::Released));

        assert!(!state.keys_down.contains(&Key::Unknown));
    }

    #[test]
    fn press_after_release_is_a_new_transition() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released));
        frame.clear();
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));

        assert!(frame.pressed(Key::Escape));
    }

    #[test]
    fn focus_loss_releases_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, InputEvent::Focused(true));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));

        assert!(!state.focused);
        assert!(state.keys_down.is_empty());
    }

    #[test]
    fn frame_clear_drops_transitions_only() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        frame.clear();

        assert!(!frame.pressed(Key::Escape));
        assert!(state.keys_down.contains(&Key::Escape));
    }
}
