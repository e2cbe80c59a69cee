//! Widgets owned by editor screens.

pub mod text_input;

pub use text_input::{CommitEvent, FieldResponse, TextFieldConfig, TextInputField};
