//! Widget core of the save editor: validated text fields and frame-timed
//! sprite animation, plus the winit sandbox that hosts them.

pub mod animation;
pub mod app;
pub mod assets;
pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod renderer;
pub mod widgets;

pub use animation::{AnimationClip, AnimationSet, ClipManifest, ClipSelector, Frame, Repeat};
pub use error::{AnimationError, AssetError, ManifestError, RenderError};
pub use geometry::{Rect, Vec2};
pub use input::{InputEvent, Key, PointerButton};
pub use widgets::{CommitEvent, FieldResponse, TextFieldConfig, TextInputField};
