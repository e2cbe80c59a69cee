//! Frame anchors (hotspots).
//!
//! An anchor is the point inside a frame that lands on the logical draw
//! position. Frames of different sizes stay aligned as long as their anchors
//! mark the same visual spot.
//!
//! ```text
//! + + + + + + + + + + + + + + + + + + + + + +
//! +  top-left  | top-center |  top-right    +
//! +  left      | center     |  right        +
//! +  bot-left  | bot-center |  bot-right    +
//! + + + + + + + + + + + + + + + + + + + + + +
//! ```

use crate::geometry::Vec2;
use crate::render::Sprite;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorPreset {
    TopLeft,
    TopCenter,
    TopRight,
    Left,
    Center,
    Right,
    #[serde(rename = "bot-left", alias = "bottom-left")]
    BottomLeft,
    #[serde(rename = "bot-center", alias = "bottom-center")]
    BottomCenter,
    #[serde(rename = "bot-right", alias = "bottom-right")]
    BottomRight,
}

impl AnchorPreset {
    pub fn resolve(self, width: u32, height: u32) -> Vec2 {
        let (w, h) = (width as i32, height as i32);
        match self {
            AnchorPreset::TopLeft => Vec2::new(0, 0),
            AnchorPreset::TopCenter => Vec2::new(w / 2, 0),
            AnchorPreset::TopRight => Vec2::new(w, 0),
            AnchorPreset::Left => Vec2::new(0, h / 2),
            AnchorPreset::Center => Vec2::new(w / 2, h / 2),
            AnchorPreset::Right => Vec2::new(w, h / 2),
            AnchorPreset::BottomLeft => Vec2::new(0, h),
            AnchorPreset::BottomCenter => Vec2::new(w / 2, h),
            AnchorPreset::BottomRight => Vec2::new(w, h),
        }
    }
}

/// Either an explicit pixel offset (`[125, 220]`) or a named preset
/// (`"center"`) in manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Anchor {
    Point([i32; 2]),
    Preset(AnchorPreset),
}

impl Default for Anchor {
    fn default() -> Self {
        Anchor::Point([0, 0])
    }
}

impl Anchor {
    pub fn resolve<S: Sprite>(&self, sprite: &S) -> Vec2 {
        match *self {
            Anchor::Point([x, y]) => Vec2::new(x, y),
            Anchor::Preset(preset) => preset.resolve(sprite.width(), sprite.height()),
        }
    }
}
