//! Frame builder for the window renderer.
//!
//! Widgets draw into a [`GpuCanvas`] exactly as they would into any other
//! canvas. The canvas turns rectangles into quad instances and text runs into
//! glyph sections; [`GpuRenderer::present`](super::GpuRenderer::present)
//! uploads both. Quads are drawn first and text on top.

use super::primitives::{QuadInstance, quad_from_rect, stroke_bars};
use super::text::{GlyphMetrics, visible_suffix};
use crate::geometry::{Rect, Vec2};
use crate::render::{Canvas, Color, Placeholder, TextStyle, circle_points, colors};
use wgpu_text::glyph_brush::{Layout, OwnedSection, OwnedText};

const FRAME_FILL: Color = [0.85, 0.85, 0.85, 1.0];
const FRAME_BORDER: u32 = 2;
const FRAME_LABEL_INSET: i32 = 6;

pub struct GpuCanvas<M: GlyphMetrics> {
    metrics: M,
    screen_width: f32,
    screen_height: f32,
    quads: Vec<QuadInstance>,
    sections: Vec<OwnedSection>,
}

impl<M: GlyphMetrics> GpuCanvas<M> {
    pub fn new(metrics: M, screen_width: u32, screen_height: u32) -> Self {
        Self {
            metrics,
            screen_width: screen_width.max(1) as f32,
            screen_height: screen_height.max(1) as f32,
            quads: Vec::new(),
            sections: Vec::new(),
        }
    }

    pub fn quads(&self) -> &[QuadInstance] {
        &self.quads
    }

    pub fn sections(&self) -> &[OwnedSection] {
        &self.sections
    }

    fn push_rect(&mut self, rect: Rect, color: Color) {
        if rect.w <= 0 || rect.h <= 0 {
            return;
        }
        self.quads
            .push(quad_from_rect(rect, color, self.screen_width, self.screen_height));
    }

    fn push_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        self.sections.push(OwnedSection {
            screen_position: (x, y),
            bounds: (self.screen_width, self.screen_height),
            layout: Layout::default_single_line(),
            text: vec![
                OwnedText::new(text)
                    .with_scale(self.metrics.px_scale())
                    .with_color(color),
            ],
        });
    }

    /// Draws the part of a text run that falls inside `area`.
    ///
    /// Characters cut by the left edge of `area` are skipped whole.
    fn blit_text(&mut self, label: &str, style: TextStyle, dest: Vec2, area: Rect) {
        let pad = style.outline.map_or(0, |o| o.width as i32);
        let offsets = self.metrics.char_offsets(label);
        let Some((index, start)) = visible_suffix(&offsets, (area.x - pad) as f32) else {
            return;
        };
        let suffix = match label.char_indices().nth(index) {
            Some((byte, _)) => &label[byte..],
            None => return,
        };

        let x = dest.x as f32 + start;
        let y = (dest.y + pad - area.y) as f32;
        if let Some(outline) = style.outline {
            for offset in circle_points(outline.width as i32) {
                self.push_text(suffix, x + offset.x as f32, y + offset.y as f32, outline.color);
            }
        }
        self.push_text(suffix, x, y, style.color);
    }

    /// Frames have no pixels here: a grey card with the frame's name.
    fn blit_frame(&mut self, label: &str, dest: Vec2, area: Rect) {
        let card = Rect::new(dest.x, dest.y, area.w, area.h);
        self.push_rect(card, FRAME_FILL);
        for bar in stroke_bars(card, FRAME_BORDER) {
            self.push_rect(bar, colors::BLACK);
        }
        self.push_text(
            label,
            (dest.x + FRAME_LABEL_INSET) as f32,
            (dest.y + FRAME_LABEL_INSET) as f32,
            colors::BLACK,
        );
    }
}

impl<M: GlyphMetrics> Canvas for GpuCanvas<M> {
    type Image = Placeholder;

    fn blit(&mut self, image: &Placeholder, dest: Vec2, area: Option<Rect>) {
        let area = area.unwrap_or(Rect::new(0, 0, image.width as i32, image.height as i32));
        match image.text {
            Some(style) => self.blit_text(&image.label, style, dest, area),
            None => self.blit_frame(&image.label, dest, area),
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.push_rect(rect, color);
    }

    /// Corners are square; `radius` is ignored. A zero thickness fills.
    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: u32, _radius: u32) {
        if thickness == 0 {
            self.push_rect(rect, color);
            return;
        }
        for bar in stroke_bars(rect, thickness) {
            self.push_rect(bar, color);
        }
    }
}
