//! Placement of the rendered text inside a field.

use crate::geometry::{Rect, Vec2};

/// Horizontal inset of the text from the field's left edge.
pub const TEXT_INSET: i32 = 2;
/// Field width minus this margin is the width available to text.
pub const INTERIOR_MARGIN: i32 = 6;
pub const CURSOR_WIDTH: i32 = 2;

/// Where the rendered text goes and which slice of it is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextLayout {
    /// Screen rectangle of the full rendered text.
    pub render_rect: Rect,
    /// Visible slice, in text-image coordinates.
    pub render_area: Rect,
}

impl TextLayout {
    /// Lays out a `text_w` x `text_h` image inside `field`.
    ///
    /// Text wider than the interior is scrolled so its tail stays visible.
    pub fn compute(field: Rect, text_w: i32, text_h: i32) -> Self {
        let render_rect = Rect::new(
            field.x + TEXT_INSET,
            field.center_y() - text_h / 2,
            text_w,
            text_h,
        );

        let interior = interior_width(field);
        let render_area = if text_w > interior {
            Rect::new(text_w - interior, 0, interior, text_h)
        } else {
            Rect::new(0, 0, text_w, text_h)
        };

        Self {
            render_rect,
            render_area,
        }
    }

    pub fn viewport_offset(&self) -> i32 {
        self.render_area.x
    }

    pub fn origin(&self) -> Vec2 {
        self.render_rect.top_left()
    }

    /// The caret sits one pixel right of the visible text.
    pub fn cursor_rect(&self) -> Rect {
        let visible = self.render_area.with_top_left(self.origin());
        Rect::new(visible.right() + 1, visible.y, CURSOR_WIDTH, visible.h)
    }
}

pub fn interior_width(field: Rect) -> i32 {
    (field.w - INTERIOR_MARGIN).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_has_no_offset() {
        let layout = TextLayout::compute(Rect::new(100, 50, 60, 30), 40, 20);
        assert_eq!(layout.viewport_offset(), 0);
        assert_eq!(layout.render_rect, Rect::new(102, 55, 40, 20));
        assert_eq!(layout.render_area, Rect::new(0, 0, 40, 20));
    }

    #[test]
    fn text_exactly_interior_wide_does_not_scroll() {
        let layout = TextLayout::compute(Rect::new(0, 0, 60, 30), 54, 20);
        assert_eq!(layout.viewport_offset(), 0);
    }

    #[test]
    fn overflow_keeps_tail_visible() {
        let layout = TextLayout::compute(Rect::new(0, 0, 60, 30), 100, 20);
        assert_eq!(layout.viewport_offset(), 46);
        assert_eq!(layout.render_area.right(), 100);
        assert_eq!(layout.render_area.w, 54);
    }

    #[test]
    fn cursor_follows_visible_text() {
        let layout = TextLayout::compute(Rect::new(10, 0, 60, 30), 100, 20);
        assert_eq!(layout.cursor_rect(), Rect::new(12 + 54 + 1, 5, 2, 20));

        let empty = TextLayout::compute(Rect::new(10, 0, 60, 30), 0, 20);
        assert_eq!(empty.cursor_rect(), Rect::new(13, 5, 2, 20));
    }

    #[test]
    fn tiny_field_has_zero_interior() {
        assert_eq!(interior_width(Rect::new(0, 0, 4, 10)), 0);
        let layout = TextLayout::compute(Rect::new(0, 0, 4, 10), 8, 10);
        assert_eq!(layout.viewport_offset(), 8);
    }
}
