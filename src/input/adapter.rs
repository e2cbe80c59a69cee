//! Translation of winit window events into [`InputEvent`]s.

use super::events::{InputEvent, Key, Modifiers, PointerButton};
use crate::geometry::Vec2;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{self, KeyCode, NamedKey, PhysicalKey};

/// Keeps the state winit spreads over several events (cursor position,
/// modifiers) and emits one [`InputEvent`] per press.
#[derive(Debug, Default)]
pub struct InputTranslator {
    cursor: Vec2,
    modifiers: Modifiers,
}

impl InputTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Returns `None` for releases and for events that only update state.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x.round() as i32, position.y.round() as i32);
                None
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                self.modifiers = Modifiers {
                    shift: state.shift_key(),
                    control: state.control_key(),
                    alt: state.alt_key(),
                    logo: state.super_key(),
                };
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => Some(InputEvent::PointerPress {
                position: self.cursor,
                button: pointer_button(*button),
            }),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key,
                        logical_key,
                        text,
                        ..
                    },
                ..
            } => {
                let key = classify_key(logical_key, physical_key);
                let text = match key {
                    Key::Other => text.as_ref().and_then(|t| t.chars().next()),
                    _ => None,
                };
                Some(InputEvent::KeyPress {
                    key,
                    text,
                    modifiers: self.modifiers,
                })
            }
            _ => None,
        }
    }
}

pub fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(id) => PointerButton::Other(id),
    }
}

pub fn classify_key(logical: &keyboard::Key, physical: &PhysicalKey) -> Key {
    if let PhysicalKey::Code(KeyCode::NumpadEnter) = physical {
        return Key::Enter;
    }
    match logical {
        keyboard::Key::Named(NamedKey::Enter) => Key::Enter,
        keyboard::Key::Named(NamedKey::Backspace) => Key::Backspace,
        keyboard::Key::Named(NamedKey::Tab) => Key::Tab,
        keyboard::Key::Named(NamedKey::Escape) => Key::Escape,
        _ => Key::Other,
    }
}
