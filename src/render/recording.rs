//! Headless canvas and text renderer.
//!
//! Used by the tests: instead of touching pixels the canvas records every
//! draw call, and text is "rendered" with a fixed advance per character.

use super::{Canvas, Color, Outline, Sprite, TextRenderer, TextStyle};
use crate::geometry::{Rect, Vec2};

/// Image handle without pixels: a label and a size. Text runs also carry
/// the style the canvas should draw the label with.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub label: String,
    pub width: u32,
    pub height: u32,
    pub text: Option<TextStyle>,
}

impl Placeholder {
    pub fn new(label: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            label: label.into(),
            width,
            height,
            text: None,
        }
    }

    pub fn text_run(label: impl Into<String>, width: u32, height: u32, style: TextStyle) -> Self {
        Self {
            text: Some(style),
            ..Self::new(label, width, height)
        }
    }
}

impl Sprite for Placeholder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

/// Fixed-pitch text: every character advances by the same amount.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceText {
    pub advance: u32,
    pub line_height: u32,
    pub outline: Option<Outline>,
}

impl MonospaceText {
    pub fn new(advance: u32, line_height: u32) -> Self {
        Self {
            advance,
            line_height,
            outline: None,
        }
    }

    pub fn with_outline(mut self, color: Color, width: u32) -> Self {
        self.outline = Some(Outline { color, width });
        self
    }

    fn padding(&self) -> u32 {
        self.outline.map_or(0, |o| o.width)
    }
}

impl TextRenderer for MonospaceText {
    type Image = Placeholder;

    fn render(&self, text: &str, color: Color) -> Placeholder {
        let width = text.chars().count() as u32 * self.advance + 2 * self.padding();
        let style = TextStyle {
            color,
            outline: self.outline,
        };
        Placeholder::text_run(text, width, self.line_height(), style)
    }

    fn line_height(&self) -> u32 {
        self.line_height + 2 * self.padding()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Blit {
        label: String,
        dest: Vec2,
        area: Option<Rect>,
    },
    Fill {
        rect: Rect,
        color: Color,
    },
    Stroke {
        rect: Rect,
        color: Color,
        thickness: u32,
        radius: u32,
    },
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn blits(&self) -> impl Iterator<Item = (&str, Vec2, Option<Rect>)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Blit { label, dest, area } => Some((label.as_str(), *dest, *area)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    type Image = Placeholder;

    fn blit(&mut self, image: &Placeholder, dest: Vec2, area: Option<Rect>) {
        self.commands.push(DrawCommand::Blit {
            label: image.label.clone(),
            dest,
            area,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Fill { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: u32, radius: u32) {
        self.commands.push(DrawCommand::Stroke {
            rect,
            color,
            thickness,
            radius,
        });
    }
}
