use crate::geometry::Rect;
use crate::render::Color;
use bytemuck::{Pod, Zeroable};

/// One solid quad, as uploaded to the instance buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    /// Centre in normalized device coordinates.
    pub center: [f32; 2],
    /// Size in normalized device coordinates.
    pub size: [f32; 2],
    pub color: [f32; 4],
}

/// Converts a pixel rectangle (origin top-left, y down) into a quad.
pub fn quad_from_rect(
    rect: Rect,
    color: Color,
    screen_width: f32,
    screen_height: f32,
) -> QuadInstance {
    let (x, y) = (rect.x as f32, rect.y as f32);
    let (width, height) = (rect.w as f32, rect.h as f32);
    let center = [
        ((x + width / 2.0) / screen_width) * 2.0 - 1.0,
        -(((y + height / 2.0) / screen_height) * 2.0 - 1.0),
    ];
    let size = [(width / screen_width) * 2.0, (height / screen_height) * 2.0];

    QuadInstance {
        center,
        size,
        color,
    }
}

/// The four bars of a `thickness` wide border lying inside `rect`.
pub fn stroke_bars(rect: Rect, thickness: u32) -> [Rect; 4] {
    let t = (thickness as i32).min(rect.w / 2).min(rect.h / 2).max(0);
    let inner_h = rect.h - 2 * t;
    [
        Rect::new(rect.x, rect.y, rect.w, t),
        Rect::new(rect.x, rect.bottom() - t, rect.w, t),
        Rect::new(rect.x, rect.y + t, t, inner_h),
        Rect::new(rect.right() - t, rect.y + t, t, inner_h),
    ]
}
