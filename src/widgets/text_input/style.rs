//! Text field appearance and commit behaviour.

use super::validation::CharRule;
use crate::render::{Color, colors};
use serde::{Deserialize, Serialize};

fn default_background() -> Option<Color> {
    Some(colors::WHITE)
}
fn default_font_color() -> Color {
    colors::BLACK
}
fn default_outline_color() -> Color {
    colors::BLACK
}
fn default_invalid_color() -> Color {
    colors::RED
}
fn default_active_color() -> Color {
    colors::BLUE
}
fn default_outline_width() -> i32 {
    2
}
fn default_outline_thickness() -> u32 {
    2
}
fn default_border_radius() -> u32 {
    3
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextFieldConfig {
    /// `None` leaves the area behind the text untouched.
    #[serde(default = "default_background")]
    pub background: Option<Color>,

    #[serde(default = "default_font_color")]
    pub font_color: Color,

    #[serde(default = "default_outline_color")]
    pub outline_color: Color,

    /// Outline color after a rejected keystroke.
    #[serde(default = "default_invalid_color")]
    pub invalid_color: Color,

    /// Outline color while focused.
    #[serde(default = "default_active_color")]
    pub active_color: Color,

    /// How far the outline sits outside the field, per side.
    #[serde(default = "default_outline_width")]
    pub outline_width: i32,

    #[serde(default = "default_outline_thickness")]
    pub outline_thickness: u32,

    #[serde(default = "default_border_radius")]
    pub border_radius: u32,

    /// Transparent fields draw neither outline nor background.
    #[serde(default)]
    pub transparent: bool,

    #[serde(default)]
    pub clear_on_commit: bool,

    #[serde(default)]
    pub stay_focused_on_commit: bool,

    #[serde(default)]
    pub rule: CharRule,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            font_color: default_font_color(),
            outline_color: default_outline_color(),
            invalid_color: default_invalid_color(),
            active_color: default_active_color(),
            outline_width: default_outline_width(),
            outline_thickness: default_outline_thickness(),
            border_radius: default_border_radius(),
            transparent: false,
            clear_on_commit: false,
            stay_focused_on_commit: false,
            rule: CharRule::default(),
        }
    }
}

impl TextFieldConfig {
    /// Outline color for the given field state. Invalid wins over focus.
    pub fn outline_for(&self, focused: bool, invalid: bool) -> Color {
        if invalid {
            self.invalid_color
        } else if focused {
            self.active_color
        } else {
            self.outline_color
        }
    }
}
