//! Input events consumed by the widgets and their winit adapter.

pub mod adapter;
pub mod events;

pub use adapter::InputTranslator;
pub use events::{InputEvent, Key, Modifiers, PointerButton};
