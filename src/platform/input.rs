//! Input events delivered to the scene
//!
//! Whatever owns the window translates device events into these and sends
//! them down a channel.

use std::fmt;

/// A discrete input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or the player asked to leave
    Quit,
    /// Primary action: flap
    Jump,
    /// Anything else; logged and ignored
    Other(String),
}

impl InputEvent {
    /// Map a key or button name to an event
    pub fn from_key(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "space" | "up" | "w" | "mouse1" => InputEvent::Jump,
            "escape" | "q" | "quit" => InputEvent::Quit,
            _ => InputEvent::Other(name.to_string()),
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Quit => f.write_str("quit"),
            InputEvent::Jump => f.write_str("jump"),
            InputEvent::Other(name) => write!(f, "unknown event {name:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key() {
        assert_eq!(InputEvent::from_key("Space"), InputEvent::Jump);
        assert_eq!(InputEvent::from_key("mouse1"), InputEvent::Jump);
        assert_eq!(InputEvent::from_key("Escape"), InputEvent::Quit);
        assert_eq!(
            InputEvent::from_key("F5"),
            InputEvent::Other("F5".to_string())
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(InputEvent::Jump.to_string(), "jump");
        assert_eq!(
            InputEvent::Other("wheel".into()).to_string(),
            "unknown event \"wheel\""
        );
    }
}
