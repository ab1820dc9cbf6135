//! Normalized input event types delivered by the host.

/// Key identifier after the host has normalized its native key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Tab key
    Tab,
    /// Space bar
    Space,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Parses a key name as written in session scripts.
    ///
    /// Named keys are case-insensitive; any other single character maps to
    /// [`Key::Char`].
    pub fn from_name(name: &str) -> Option<Key> {
        match name.to_lowercase().as_str() {
            "escape" | "esc" => return Some(Key::Escape),
            "return" | "enter" => return Some(Key::Return),
            "backspace" => return Some(Key::Backspace),
            "tab" => return Some(Key::Tab),
            "space" => return Some(Key::Space),
            _ => {}
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(Key::Char(c)),
            _ => None,
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A pointer event in image coordinates.
///
/// Handlers call [`PointerEvent::stop_propagation`] when the host should not
/// forward the event to anything else (other listeners, the next tool).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub button: MouseButton,
    propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(x: i32, y: i32, button: MouseButton) -> Self {
        Self {
            x,
            y,
            button,
            propagation_stopped: false,
        }
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// The event that caused a tool switch, handed to the incoming tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToolEvent {
    Pointer(PointerEvent),
    Key(Key),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_parse() {
        assert_eq!(Key::from_name("Escape"), Some(Key::Escape));
        assert_eq!(Key::from_name("esc"), Some(Key::Escape));
        assert_eq!(Key::from_name("enter"), Some(Key::Return));
        assert_eq!(Key::from_name("t"), Some(Key::Char('t')));
        assert_eq!(Key::from_name("é"), Some(Key::Char('é')));
        assert_eq!(Key::from_name("ctrl"), None);
        assert_eq!(Key::from_name(""), None);
    }

    #[test]
    fn stop_propagation_sticks() {
        let mut event = PointerEvent::new(1, 2, MouseButton::Left);
        assert!(!event.propagation_stopped());
        event.stop_propagation();
        assert!(event.propagation_stopped());
    }
}
