//! Integer screen geometry shared by the widgets.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// 2D integer position or offset, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Vec2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Grows the rectangle by `dw`/`dh` in total, keeping its centre.
    pub fn inflate(&self, dw: i32, dh: i32) -> Rect {
        Rect::new(self.x - dw / 2, self.y - dh / 2, self.w + dw, self.h + dh)
    }

    pub fn with_top_left(&self, origin: Vec2) -> Rect {
        Rect::new(origin.x, origin.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_far_edges() {
        let rect = Rect::new(10, 10, 20, 5);
        assert!(rect.contains(Vec2::new(10, 10)));
        assert!(rect.contains(Vec2::new(29, 14)));
        assert!(!rect.contains(Vec2::new(30, 12)));
        assert!(!rect.contains(Vec2::new(15, 15)));
    }

    #[test]
    fn inflate_keeps_center() {
        let rect = Rect::new(10, 10, 20, 20).inflate(4, 4);
        assert_eq!(rect, Rect::new(8, 8, 24, 24));
    }
}
