//! Rendering seams consumed by the widgets.
//!
//! The widgets never draw pixels themselves. They compute what to draw and
//! hand it to a [`Canvas`] supplied by the host renderer; text is turned into
//! images by a [`TextRenderer`] so that fonts stay a host concern.

pub mod recording;

use crate::geometry::{Rect, Vec2};

pub use recording::{DrawCommand, MonospaceText, Placeholder, RecordingCanvas};

/// RGBA color type
pub type Color = [f32; 4];

/// Common color constants
pub mod colors {
    use super::Color;

    pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
    pub const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
    pub const RED: Color = [1.0, 0.0, 0.0, 1.0];
    pub const BLUE: Color = [0.0, 0.0, 1.0, 1.0];
}

/// Outline drawn around a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color,
    /// Radius of the outline in pixels. The run grows by this much on each side.
    pub width: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub outline: Option<Outline>,
}

/// Integer points on a circle of radius `r` (Bresenham), sorted.
///
/// Outlined text is drawn once at each of these offsets in the outline
/// colour, then once in the text colour on top.
pub fn circle_points(r: i32) -> Vec<Vec2> {
    let (mut x, mut y, mut e) = (r, 0, 1 - r);
    let mut octant = Vec::new();
    while x >= y {
        octant.push((x, y));
        y += 1;
        if e < 0 {
            e += 2 * y - 1;
        } else {
            x -= 1;
            e += 2 * (y - x) - 1;
        }
    }

    let mut points = octant.clone();
    points.extend(octant.iter().filter(|(x, y)| x > y).map(|&(x, y)| (y, x)));
    let mirrored: Vec<_> = points.iter().filter(|(x, _)| *x != 0).map(|&(x, y)| (-x, y)).collect();
    points.extend(mirrored);
    let flipped: Vec<_> = points.iter().filter(|(_, y)| *y != 0).map(|&(x, y)| (x, -y)).collect();
    points.extend(flipped);

    points.sort();
    points.into_iter().map(Vec2::from).collect()
}

/// Anything with pixel dimensions: decoded frames, rendered text runs.
pub trait Sprite {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// Turns a string into a drawable image (a glyph run).
pub trait TextRenderer {
    type Image: Sprite;

    fn render(&self, text: &str, color: Color) -> Self::Image;

    /// Height of one rendered line, outline included.
    fn line_height(&self) -> u32;
}

/// Drawable surface provided by the host.
pub trait Canvas {
    type Image: Sprite;

    /// Draws `image` with its top-left at `dest`. When `area` is set only that
    /// sub-rectangle of the image (in image coordinates) is copied.
    fn blit(&mut self, image: &Self::Image, dest: Vec2, area: Option<Rect>);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, thickness: u32, radius: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_of_radius_two() {
        let points = circle_points(2);
        assert_eq!(points.len(), 12);
        assert!(points.contains(&Vec2::new(2, 0)));
        assert!(points.contains(&Vec2::new(-1, -2)));
        assert!(!points.contains(&Vec2::ZERO));
        for p in &points {
            assert!(points.contains(&Vec2::new(-p.x, -p.y)));
        }
    }

    #[test]
    fn circle_of_radius_zero_is_origin() {
        assert_eq!(circle_points(0), vec![Vec2::ZERO]);
    }
}
