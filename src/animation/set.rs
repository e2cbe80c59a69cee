//! Named animation clips with time-based playback.

use super::clip::AnimationClip;
use crate::error::AnimationError;
use crate::geometry::Vec2;
use crate::render::Canvas;
use indexmap::IndexMap;

/// Selects a clip either by name or by position in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipSelector {
    Name(String),
    /// Clamped into `[0, len - 1]`.
    Ordinal(usize),
}

impl From<&str> for ClipSelector {
    fn from(name: &str) -> Self {
        ClipSelector::Name(name.to_string())
    }
}

impl From<String> for ClipSelector {
    fn from(name: String) -> Self {
        ClipSelector::Name(name)
    }
}

impl From<usize> for ClipSelector {
    fn from(index: usize) -> Self {
        ClipSelector::Ordinal(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No clip has been activated yet.
    Idle,
    Playing,
    /// Either the active clip or the whole set is paused.
    Paused,
}

/// An object that can be animated: owns its clips, remembers which one is
/// showing and how much time has not yet been turned into frames.
#[derive(Debug, Clone)]
pub struct AnimationSet<I> {
    clips: IndexMap<String, AnimationClip<I>>,
    active: Option<String>,
    elapsed_ms: u64,
    paused: bool,
}

impl<I> Default for AnimationSet<I> {
    fn default() -> Self {
        Self {
            clips: IndexMap::new(),
            active: None,
            elapsed_ms: 0,
            paused: false,
        }
    }
}

impl<I> AnimationSet<I> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from initial clips and activates the first one, if any.
    pub fn with_clips<N, T>(clips: T) -> Self
    where
        N: Into<String>,
        T: IntoIterator<Item = (N, AnimationClip<I>)>,
    {
        let mut set = Self::new();
        for (name, clip) in clips {
            set.add_or_replace_clip(name, clip);
        }
        if let Some((name, clip)) = set.clips.get_index_mut(0) {
            clip.set_current_frame(0);
            set.active = Some(name.clone());
        }
        set
    }

    /// Adds a clip, or overrides the clip registered under the same name.
    ///
    /// An overridden clip keeps its original position for ordinal lookup.
    /// Never changes which clip is active.
    pub fn add_or_replace_clip(
        &mut self,
        name: impl Into<String>,
        clip: AnimationClip<I>,
    ) -> Option<AnimationClip<I>> {
        self.clips.insert(name.into(), clip)
    }

    /// Removes a clip. If it was active, `current` reports it as not found
    /// until another clip is activated.
    pub fn remove_clip(&mut self, name: &str) -> Option<AnimationClip<I>> {
        self.clips.shift_remove(name)
    }

    /// Changes the active clip.
    ///
    /// With `reset` the newly active clip restarts from its first frame,
    /// otherwise it keeps its frame position.
    pub fn set_active(
        &mut self,
        selector: impl Into<ClipSelector>,
        reset: bool,
    ) -> Result<(), AnimationError> {
        let name = self.resolve(selector.into())?;
        log::debug!("ANIMATION: switching to '{}' (reset: {})", name, reset);

        if reset && let Some(clip) = self.clips.get_mut(&name) {
            clip.set_current_frame(0);
        }
        self.active = Some(name);
        Ok(())
    }

    fn resolve(&self, selector: ClipSelector) -> Result<String, AnimationError> {
        match selector {
            ClipSelector::Name(name) => {
                if self.clips.contains_key(&name) {
                    Ok(name)
                } else {
                    Err(AnimationError::NotFound(name))
                }
            }
            ClipSelector::Ordinal(index) => {
                let last = self.clips.len().checked_sub(1).ok_or(AnimationError::NoClips)?;
                self.clips
                    .get_index(index.min(last))
                    .map(|(name, _)| name.clone())
                    .ok_or(AnimationError::NoClips)
            }
        }
    }

    pub fn current(&self) -> Result<&AnimationClip<I>, AnimationError> {
        let name = self.active.as_ref().ok_or(AnimationError::NoneSelected)?;
        self.clips
            .get(name)
            .ok_or_else(|| AnimationError::NotFound(name.clone()))
    }

    pub fn current_mut(&mut self) -> Result<&mut AnimationClip<I>, AnimationError> {
        let name = self.active.as_ref().ok_or(AnimationError::NoneSelected)?;
        self.clips
            .get_mut(name)
            .ok_or_else(|| AnimationError::NotFound(name.clone()))
    }

    /// Feeds elapsed time into the active clip and returns how many frames
    /// were stepped.
    ///
    /// Whole frame intervals are consumed and the remainder is carried to the
    /// next call, so playback speed does not depend on the caller's tick rate.
    /// Clips always loop.
    pub fn advance(&mut self, elapsed_ms: u64) -> Result<u64, AnimationError> {
        let set_paused = self.paused;
        let name = self.active.as_ref().ok_or(AnimationError::NoneSelected)?;
        let clip = self
            .clips
            .get_mut(name)
            .ok_or_else(|| AnimationError::NotFound(name.clone()))?;

        if set_paused || clip.is_paused() || clip.is_static() {
            return Ok(0);
        }

        let interval = u64::from(clip.speed_ms());
        // Whole intervals of the delta first, so the sum cannot overflow.
        let carried = self.elapsed_ms + elapsed_ms % interval;
        let frames = elapsed_ms / interval + carried / interval;
        self.elapsed_ms = carried % interval;
        clip.step_by(frames);
        Ok(frames)
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

    pub fn state(&self) -> PlaybackState {
        match self.current() {
            Err(_) => PlaybackState::Idle,
            Ok(clip) if self.paused || clip.is_paused() => PlaybackState::Paused,
            Ok(_) => PlaybackState::Playing,
        }
    }

    /// Time carried over from previous advances, always below one interval.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.clips.keys().map(String::as_str)
    }

    pub fn get(&self, name: &str) -> Option<&AnimationClip<I>> {
        self.clips.get(name)
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Draws the current frame so that its anchor lands on `position`.
    pub fn render_target<C>(&self, canvas: &mut C, position: Vec2) -> Result<(), AnimationError>
    where
        C: Canvas<Image = I>,
    {
        let frame = self.current()?.current_frame();
        canvas.blit(&frame.image, position - frame.anchor, None);
        Ok(())
    }
}
