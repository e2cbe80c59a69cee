//! Frame-timed sprite animation.
//!
//! An [`AnimationSet`] owns named [`AnimationClip`]s and turns a stream of
//! elapsed-time deltas into frame steps of the active clip, independent of
//! the render frame rate.

pub mod clip;
pub mod manifest;
pub mod set;

pub use clip::{AnimationClip, Frame, Repeat};
pub use manifest::ClipManifest;
pub use set::{AnimationSet, ClipSelector, PlaybackState};
