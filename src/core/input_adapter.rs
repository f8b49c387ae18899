use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller, InputState};

/// Adapter that bridges Winit keyboard events to the Controller trait
#[derive(Debug, Clone, Default)]
pub struct WinitController {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Movement flags, updated on every press/release edge
    input: InputState,
}

impl WinitController {
    /// Create a new WinitController with no pressed keys
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a Winit WindowEvent and update internal state
    pub fn process_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::KeyboardInput { event, .. } = event {
            if let PhysicalKey::Code(keycode) = event.physical_key {
                if let Some(button) = Self::keycode_to_button(keycode) {
                    self.apply(button, event.state == ElementState::Pressed);
                }
            }
        }
    }

    /// Record a press or release edge for one button
    pub fn apply(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.pressed_keys.insert(button);
        } else {
            self.pressed_keys.remove(&button);
        }

        if let Some(direction) = button.direction() {
            self.input.set(direction, pressed);
        }
    }

    /// Release everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        self.pressed_keys.clear();
        self.input = InputState::default();
    }

    /// Map Winit KeyCode to Button
    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }
}

impl Controller for WinitController {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn input_state(&self) -> InputState {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Note: Winit KeyEvent has private fields, so tests drive `apply` directly

    #[test]
    fn test_new_controller_empty() {
        let controller = WinitController::new();
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.input_state(), InputState::default());
    }

    #[test]
    fn test_press_and_release() {
        let mut controller = WinitController::new();
        controller.apply(Button::KeyW, true);
        assert!(controller.is_down(Button::KeyW));
        assert!(controller.input_state().forward);

        controller.apply(Button::KeyW, false);
        assert!(!controller.is_down(Button::KeyW));
        assert!(!controller.input_state().forward);
    }

    #[test]
    fn test_repeat_press_is_idempotent() {
        let mut controller = WinitController::new();
        controller.apply(Button::KeyA, true);
        controller.apply(Button::KeyA, true);
        controller.apply(Button::KeyA, false);
        assert!(!controller.input_state().left);
    }

    #[test]
    fn test_keys_independent() {
        let mut controller = WinitController::new();
        controller.apply(Button::KeyD, true);
        controller.apply(Button::KeyS, true);
        controller.apply(Button::KeyD, false);

        let input = controller.input_state();
        assert!(!input.right);
        assert!(input.backward);
        assert!(!input.forward);
        assert!(!input.left);
    }

    #[test]
    fn test_escape_does_not_move() {
        let mut controller = WinitController::new();
        controller.apply(Button::Escape, true);
        assert!(controller.is_down(Button::Escape));
        assert_eq!(controller.input_state(), InputState::default());
    }

    #[test]
    fn test_clear() {
        let mut controller = WinitController::new();
        controller.apply(Button::KeyW, true);
        controller.apply(Button::KeyA, true);
        controller.clear();
        assert!(!controller.is_down(Button::KeyW));
        assert_eq!(controller.input_state(), InputState::default());
    }

    #[test]
    fn test_keycode_mapping() {
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyW), Some(Button::KeyW));
        assert_eq!(WinitController::keycode_to_button(KeyCode::KeyD), Some(Button::KeyD));
        assert_eq!(WinitController::keycode_to_button(KeyCode::ArrowUp), None);
        assert_eq!(WinitController::keycode_to_button(KeyCode::ArrowRight), None);
        assert_eq!(WinitController::keycode_to_button(KeyCode::Space), None);
    }
}
