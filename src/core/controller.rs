/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Escape,
}

impl Button {
    /// Maps a browser-style key name (`"w"`, `"Escape"`, ...) to a button
    pub fn from_key_name(name: &str) -> Option<Button> {
        match name {
            "w" | "W" => Some(Button::KeyW),
            "a" | "A" => Some(Button::KeyA),
            "s" | "S" => Some(Button::KeyS),
            "d" | "D" => Some(Button::KeyD),
            "Escape" => Some(Button::Escape),
            _ => None,
        }
    }

    /// Movement direction driven by this button, if any
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Button::KeyW => Some(Direction::Forward),
            Button::KeyS => Some(Direction::Backward),
            Button::KeyA => Some(Direction::Left),
            Button::KeyD => Some(Direction::Right),
            Button::Escape => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// Held movement keys, one independent flag per direction
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl InputState {
    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Forward => self.forward = pressed,
            Direction::Backward => self.backward = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Movement flags derived from the buttons currently down
    fn input_state(&self) -> InputState;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Button::from_key_name("w"), Some(Button::KeyW));
        assert_eq!(Button::from_key_name("a"), Some(Button::KeyA));
        assert_eq!(Button::from_key_name("s"), Some(Button::KeyS));
        assert_eq!(Button::from_key_name("d"), Some(Button::KeyD));
        assert_eq!(Button::from_key_name("Escape"), Some(Button::Escape));
    }

    #[test]
    fn test_arrow_keys_ignored() {
        for name in ["ArrowUp", "ArrowLeft", "ArrowDown", "ArrowRight", "q", ""] {
            assert_eq!(Button::from_key_name(name), None, "{name}");
        }
    }

    #[test]
    fn test_button_directions() {
        assert_eq!(Button::KeyW.direction(), Some(Direction::Forward));
        assert_eq!(Button::KeyS.direction(), Some(Direction::Backward));
        assert_eq!(Button::KeyA.direction(), Some(Direction::Left));
        assert_eq!(Button::KeyD.direction(), Some(Direction::Right));
        assert_eq!(Button::Escape.direction(), None);
    }

    #[test]
    fn test_right_press_touches_only_right() {
        let mut input = InputState::default();
        input.set(Direction::Right, true);
        assert_eq!(
            input,
            InputState {
                right: true,
                ..InputState::default()
            }
        );
    }

    #[test]
    fn test_release_keeps_other_flags() {
        let mut input = InputState::default();
        input.set(Direction::Forward, true);
        input.set(Direction::Left, true);
        input.set(Direction::Forward, false);

        assert_eq!(
            input,
            InputState {
                left: true,
                ..InputState::default()
            }
        );
    }

    // Test mock controller implementation
    struct MockController {
        pressed: Vec<Button>,
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn input_state(&self) -> InputState {
            let mut input = InputState::default();
            for direction in self.pressed.iter().filter_map(|b| b.direction()) {
                input.set(direction, true);
            }
            input
        }
    }

    #[test]
    fn test_controller_input_state() {
        let controller = MockController {
            pressed: vec![Button::KeyW, Button::KeyD, Button::Escape],
        };

        let input = controller.input_state();
        assert!(input.forward);
        assert!(input.right);
        assert!(!input.backward);
        assert!(!input.left);
        assert!(controller.is_down(Button::Escape));
    }
}
