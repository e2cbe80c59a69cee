//! Font loading and glyph measurement for the window renderer.

use crate::error::RenderError;
use crate::render::{Color, MonospaceText, Outline, Placeholder, TextRenderer, TextStyle};
use std::fmt;
use std::path::Path;
use wgpu_text::glyph_brush::ab_glyph::{Font, FontArc, PxScale, ScaleFont};

/// Loads a TTF/OTF font from disk.
pub fn load_font(path: &Path) -> Result<FontArc, RenderError> {
    log::info!("RENDER: loading font {}", path.display());
    let data =
        std::fs::read(path).map_err(|e| RenderError::Font(format!("{}: {}", path.display(), e)))?;
    FontArc::try_from_vec(data).map_err(|e| RenderError::Font(format!("{}: {}", path.display(), e)))
}

/// What the canvas needs to know to place glyphs of a text run.
pub trait GlyphMetrics {
    /// Pixel scale the glyphs are drawn at.
    fn px_scale(&self) -> f32;

    /// Left edge of every character, relative to the start of the run.
    fn char_offsets(&self, text: &str) -> Vec<f32>;
}

/// Text rendered with a real font through `wgpu_text`.
#[derive(Clone)]
pub struct GlyphText {
    font: FontArc,
    scale: f32,
    outline: Option<Outline>,
}

impl GlyphText {
    pub fn new(font: FontArc, scale: f32) -> Self {
        Self {
            font,
            scale,
            outline: None,
        }
    }

    pub fn with_outline(mut self, color: Color, width: u32) -> Self {
        self.outline = Some(Outline { color, width });
        self
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    fn padding(&self) -> u32 {
        self.outline.map_or(0, |o| o.width)
    }

    /// Width of `text` without outline.
    fn advance_width(&self, text: &str) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(self.scale));
        let offsets = self.char_offsets(text);
        match (offsets.last(), text.chars().last()) {
            (Some(start), Some(ch)) => start + scaled.h_advance(scaled.glyph_id(ch)),
            _ => 0.0,
        }
    }
}

impl fmt::Debug for GlyphText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphText")
            .field("scale", &self.scale)
            .field("outline", &self.outline)
            .finish_non_exhaustive()
    }
}

impl GlyphMetrics for GlyphText {
    fn px_scale(&self) -> f32 {
        self.scale
    }

    fn char_offsets(&self, text: &str) -> Vec<f32> {
        let scaled = self.font.as_scaled(PxScale::from(self.scale));
        let mut offsets = Vec::with_capacity(text.len());
        let mut caret = 0.0;
        let mut previous = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = previous {
                caret += scaled.h_advance(prev) + scaled.kern(prev, id);
            }
            offsets.push(caret);
            previous = Some(id);
        }
        offsets
    }
}

impl TextRenderer for GlyphText {
    type Image = Placeholder;

    fn render(&self, text: &str, color: Color) -> Placeholder {
        let width = self.advance_width(text).ceil() as u32 + 2 * self.padding();
        let style = TextStyle {
            color,
            outline: self.outline,
        };
        Placeholder::text_run(text, width, self.line_height(), style)
    }

    fn line_height(&self) -> u32 {
        let scaled = self.font.as_scaled(PxScale::from(self.scale));
        scaled.height().ceil() as u32 + 2 * self.padding()
    }
}

impl GlyphMetrics for MonospaceText {
    fn px_scale(&self) -> f32 {
        self.line_height as f32
    }

    fn char_offsets(&self, text: &str) -> Vec<f32> {
        (0..text.chars().count())
            .map(|i| (i as u32 * self.advance) as f32)
            .collect()
    }
}

/// First character whose left edge is at least `skip` pixels into the run,
/// with that edge's distance from `skip`.
pub fn visible_suffix(offsets: &[f32], skip: f32) -> Option<(usize, f32)> {
    offsets
        .iter()
        .position(|&offset| offset >= skip)
        .map(|index| (index, offsets[index] - skip))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monospace_offsets() {
        let text = MonospaceText::new(10, 20);
        assert_eq!(text.char_offsets("abc"), vec![0.0, 10.0, 20.0]);
        assert!(text.char_offsets("").is_empty());
    }

    #[test]
    fn suffix_starts_at_first_whole_char() {
        let offsets = [0.0, 10.0, 20.0, 30.0];
        assert_eq!(visible_suffix(&offsets, 0.0), Some((0, 0.0)));
        assert_eq!(visible_suffix(&offsets, 20.0), Some((2, 0.0)));
        assert_eq!(visible_suffix(&offsets, 15.0), Some((2, 5.0)));
        assert_eq!(visible_suffix(&offsets, 31.0), None);
    }

    #[test]
    fn missing_font_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_font(&dir.path().join("nope.ttf")).unwrap_err();
        assert!(matches!(err, RenderError::Font(_)));
    }

    #[test]
    fn garbage_font_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(matches!(load_font(&path), Err(RenderError::Font(_))));
    }
}
