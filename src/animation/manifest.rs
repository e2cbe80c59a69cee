//! JSON clip manifests.
//!
//! Each character folder ships a small JSON document describing its idle
//! animation:
//!
//! ```json
//! { "name": "freddy", "id": 0, "speed": 40,
//!   "frames": ["freddy_1.png", "freddy_2.png"], "anchor": [125, 220] }
//! ```
//!
//! Decoding the frame files is the caller's job: [`ClipManifest::build`]
//! only asks a loader for each listed path, through an [`AssetCache`] so
//! frames shared between clips are loaded once.

use super::clip::{AnimationClip, Frame, Repeat};
use crate::assets::{Anchor, AssetCache};
use crate::error::ManifestError;
use crate::render::Sprite;
use serde::{Deserialize, Serialize};

fn default_repeat() -> Repeat {
    Repeat::Infinite
}
fn default_icon() -> String {
    "undefined.png".into()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipManifest {
    pub name: String,
    pub id: u32,
    pub frames: Vec<String>,
    /// Milliseconds per frame.
    pub speed: u32,

    #[serde(default = "default_repeat")]
    pub repeat: Repeat,

    /// Anchor applied to every frame of the clip.
    #[serde(default)]
    pub anchor: Anchor,

    #[serde(default = "default_icon")]
    pub icon: String,
}

impl ClipManifest {
    pub fn from_json(data: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Builds the clip, loading each frame through `cache`.
    pub fn build<I, F>(
        &self,
        cache: &mut AssetCache<String, I>,
        mut load: F,
    ) -> Result<AnimationClip<I>, ManifestError>
    where
        I: Sprite + Clone,
        F: FnMut(&str) -> Result<I, String>,
    {
        if self.frames.is_empty() {
            return Err(ManifestError::EmptyFrames(self.name.clone()));
        }

        let mut frames = Vec::with_capacity(self.frames.len());
        for path in &self.frames {
            let image = cache
                .get_or_load(path, |key| load(key.as_str()))
                .map_err(|source| ManifestError::Frame {
                    path: path.clone(),
                    source,
                })?;
            frames.push(Frame::anchored(image.clone(), self.anchor));
        }

        log::debug!(
            "ANIMATION: built '{}' with {} frames at {}ms",
            self.name,
            frames.len(),
            self.speed
        );

        AnimationClip::new(frames, self.speed, self.repeat)
            .map_err(|_| ManifestError::EmptyFrames(self.name.clone()))
    }
}
