//! A single animation clip: an ordered list of anchored frames.

use crate::assets::Anchor;
use crate::error::AnimationError;
use crate::geometry::Vec2;
use crate::render::Sprite;
use serde::{Deserialize, Serialize};

/// A frame handle plus the anchor it is drawn around.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<I> {
    pub image: I,
    pub anchor: Vec2,
}

impl<I: Sprite> Frame<I> {
    /// Frame anchored at its top-left corner.
    pub fn new(image: I) -> Self {
        Self {
            image,
            anchor: Vec2::ZERO,
        }
    }

    pub fn anchored(image: I, anchor: Anchor) -> Self {
        let anchor = anchor.resolve(&image);
        Self { image, anchor }
    }
}

/// How many times a clip is meant to play. `-1` in manifests means forever.
///
/// Playback currently always loops; the count is kept so that owners can
/// enforce it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum Repeat {
    Infinite,
    Times(u32),
}

impl From<i32> for Repeat {
    fn from(raw: i32) -> Self {
        if raw < 0 {
            Repeat::Infinite
        } else {
            Repeat::Times(raw as u32)
        }
    }
}

impl From<Repeat> for i32 {
    fn from(repeat: Repeat) -> Self {
        match repeat {
            Repeat::Infinite => -1,
            Repeat::Times(n) => n.min(i32::MAX as u32) as i32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnimationClip<I> {
    frames: Vec<Frame<I>>,
    /// Milliseconds per frame.
    speed_ms: u32,
    repeat: Repeat,
    current_frame: usize,
    paused: bool,
}

impl<I> AnimationClip<I> {
    pub fn new(
        frames: Vec<Frame<I>>,
        speed_ms: u32,
        repeat: Repeat,
    ) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::EmptyClip);
        }
        Ok(Self {
            frames,
            speed_ms,
            repeat,
            current_frame: 0,
            paused: false,
        })
    }

    /// A zero speed or a single frame never advances.
    pub fn is_static(&self) -> bool {
        self.speed_ms == 0 || self.frames.len() == 1
    }

    pub fn is_looping(&self) -> bool {
        self.repeat == Repeat::Infinite
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn repeat(&self) -> Repeat {
        self.repeat
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame<I>] {
        &self.frames
    }

    pub fn current_index(&self) -> usize {
        self.current_frame
    }

    pub fn current_frame(&self) -> &Frame<I> {
        &self.frames[self.current_frame]
    }

    /// Jumps to `frame`, wrapping around the clip length.
    pub fn set_current_frame(&mut self, frame: usize) {
        self.current_frame = frame % self.frames.len();
    }

    /// Goes to the next frame.
    pub fn step(&mut self) {
        self.step_by(1);
    }

    pub fn step_by(&mut self, frames: u64) {
        if self.is_static() {
            return;
        }
        let len = self.frames.len() as u64;
        let next = (self.current_frame as u64 + frames % len) % len;
        self.current_frame = next as usize;
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Placeholder;

    fn clip(frame_count: usize, speed_ms: u32) -> AnimationClip<Placeholder> {
        let frames = (0..frame_count)
            .map(|i| Frame::new(Placeholder::new(format!("f{i}"), 10, 10)))
            .collect();
        AnimationClip::new(frames, speed_ms, Repeat::Infinite).unwrap()
    }

    #[test]
    fn empty_clip_is_rejected() {
        let err = AnimationClip::<Placeholder>::new(Vec::new(), 40, Repeat::Infinite);
        assert!(matches!(err, Err(AnimationError::EmptyClip)));
    }

    #[test]
    fn step_wraps_around() {
        let mut clip = clip(3, 40);
        clip.step();
        clip.step();
        assert_eq!(clip.current_index(), 2);
        clip.step();
        assert_eq!(clip.current_index(), 0);
        clip.step_by(7);
        assert_eq!(clip.current_index(), 1);
    }

    #[test]
    fn static_clips_never_move() {
        let mut zero_speed = clip(4, 0);
        zero_speed.step_by(3);
        assert_eq!(zero_speed.current_index(), 0);

        let mut single = clip(1, 40);
        assert!(single.is_static());
        single.step();
        assert_eq!(single.current_index(), 0);
    }

    #[test]
    fn set_current_frame_wraps() {
        let mut clip = clip(4, 40);
        clip.set_current_frame(6);
        assert_eq!(clip.current_index(), 2);
    }

    #[test]
    fn repeat_maps_manifest_integers() {
        assert_eq!(Repeat::from(-1), Repeat::Infinite);
        assert_eq!(Repeat::from(3), Repeat::Times(3));
        assert_eq!(i32::from(Repeat::Infinite), -1);
        assert!(clip(2, 40).is_looping());
    }

    #[test]
    fn anchored_frame_resolves_preset() {
        let frame = Frame::anchored(
            Placeholder::new("button", 40, 20),
            Anchor::Preset(crate::assets::AnchorPreset::Center),
        );
        assert_eq!(frame.anchor, Vec2::new(20, 10));
    }
}
