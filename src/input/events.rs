//! Input events as seen by the widgets.

use crate::geometry::Vec2;

/// Keys the widgets react to by identity. Everything else is `Other` and
/// only matters through the character it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Return or keypad Enter.
    Enter,
    Backspace,
    Tab,
    Escape,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub logo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button.
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyPress {
        key: Key,
        /// Character produced by the press, if any.
        text: Option<char>,
        modifiers: Modifiers,
    },
    PointerPress {
        position: Vec2,
        button: PointerButton,
    },
}

impl InputEvent {
    /// A key press that only produced `ch`.
    pub fn char(ch: char) -> Self {
        InputEvent::KeyPress {
            key: Key::Other,
            text: Some(ch),
            modifiers: Modifiers::default(),
        }
    }

    pub fn key(key: Key) -> Self {
        InputEvent::KeyPress {
            key,
            text: None,
            modifiers: Modifiers::default(),
        }
    }

    pub fn click(x: i32, y: i32) -> Self {
        InputEvent::PointerPress {
            position: Vec2::new(x, y),
            button: PointerButton::Primary,
        }
    }
}
