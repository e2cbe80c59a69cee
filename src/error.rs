//! Error types for the animation, asset and GPU layers.
//!
//! The text field has no error type: rejected keystrokes and backspace on an
//! empty buffer are ordinary outcomes, not failures.

use std::fmt;

/// Raised when an animation set is used without a valid active clip.
///
/// This signals a programming error in the owner (it forgot to activate a
/// default clip, or removed the active one) and should abort the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// No clip was ever activated.
    NoneSelected,
    /// The active or requested clip name is not registered.
    NotFound(String),
    /// Ordinal selection on a set without clips.
    NoClips,
    /// A clip was built without frames.
    EmptyClip,
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::NoneSelected => write!(f, "No animation selected"),
            AnimationError::NotFound(name) => write!(f, "Animation '{}' not found", name),
            AnimationError::NoClips => write!(f, "Animation set has no clips"),
            AnimationError::EmptyClip => write!(f, "Animation has no frames"),
        }
    }
}

impl std::error::Error for AnimationError {}

/// Failure while turning a clip manifest into a clip.
#[derive(Debug)]
pub enum ManifestError {
    /// The manifest is not valid JSON or misses required fields.
    Parse(serde_json::Error),
    /// The manifest lists no frames.
    EmptyFrames(String),
    /// The frame loader rejected one of the frames.
    Frame { path: String, source: AssetError },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Parse(e) => write!(f, "Invalid clip manifest: {}", e),
            ManifestError::EmptyFrames(name) => write!(f, "Clip '{}' lists no frames", name),
            ManifestError::Frame { path, source } => {
                write!(f, "Failed to load frame {:?}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Parse(e) => Some(e),
            ManifestError::Frame { source, .. } => Some(source),
            ManifestError::EmptyFrames(_) => None,
        }
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(e: serde_json::Error) -> Self {
        ManifestError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// The cache was sealed and the key was not preloaded.
    Sealed(String),
    /// The loader failed.
    Load { key: String, message: String },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Sealed(key) => write!(f, "Asset cache is sealed, {} was never loaded", key),
            AssetError::Load { key, message } => write!(f, "Loading {} failed: {}", key, message),
        }
    }
}

impl std::error::Error for AssetError {}

/// Failure while setting up the window renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The font file is missing or not a font.
    Font(String),
    Surface(String),
    Adapter(String),
    Device(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Font(msg) => write!(f, "Cannot load font: {}", msg),
            RenderError::Surface(msg) => write!(f, "Cannot create surface: {}", msg),
            RenderError::Adapter(msg) => write!(f, "No suitable GPU adapter: {}", msg),
            RenderError::Device(msg) => write!(f, "Cannot open GPU device: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}
