//! Keyboard input handling

use std::collections::HashSet;

use game_core::{InputState, PaddleIntent};
use winit::keyboard::KeyCode;

pub const PLAYER_UP: KeyCode = KeyCode::KeyW;
pub const PLAYER_DOWN: KeyCode = KeyCode::KeyS;
pub const ENEMY_UP: KeyCode = KeyCode::KeyI;
pub const ENEMY_DOWN: KeyCode = KeyCode::KeyK;

/// Tracks which physical keys are currently held
#[derive(Debug, Default)]
pub struct Keyboard {
    pressed_keys: HashSet<KeyCode>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, keycode: KeyCode, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(keycode);
        } else {
            self.pressed_keys.remove(&keycode);
        }
    }

    /// Release events are not delivered while unfocused, so drop everything
    pub fn handle_focus(&mut self, focused: bool) {
        if !focused {
            self.pressed_keys.clear();
        }
    }

    pub fn is_held(&self, keycode: KeyCode) -> bool {
        self.pressed_keys.contains(&keycode)
    }

    /// Sample the held keys for one tick
    pub fn input_state(&self) -> InputState {
        InputState {
            player: PaddleIntent::new(self.is_held(PLAYER_UP), self.is_held(PLAYER_DOWN)),
            enemy: PaddleIntent::new(self.is_held(ENEMY_UP), self.is_held(ENEMY_DOWN)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::KeyW, true);
        keyboard.handle_key(KeyCode::KeyK, true);

        let input = keyboard.input_state();
        assert_eq!(input.player, PaddleIntent::new(true, false));
        assert_eq!(input.enemy, PaddleIntent::new(false, true));
    }

    #[test]
    fn test_release_clears_key() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::KeyS, true);
        keyboard.handle_key(KeyCode::KeyS, false);
        assert_eq!(keyboard.input_state(), InputState::new());
    }

    #[test]
    fn test_both_keys_reported() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::KeyI, true);
        keyboard.handle_key(KeyCode::KeyK, true);
        assert_eq!(keyboard.input_state().enemy, PaddleIntent::new(true, true));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::ArrowUp, true);
        keyboard.handle_key(KeyCode::Space, true);
        assert_eq!(keyboard.input_state(), InputState::new());
    }

    #[test]
    fn test_focus_loss_releases_everything() {
        let mut keyboard = Keyboard::new();
        keyboard.handle_key(KeyCode::KeyW, true);
        keyboard.handle_focus(false);
        assert!(!keyboard.is_held(KeyCode::KeyW));
    }
}
