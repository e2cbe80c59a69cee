//! Asset-side helpers: frame anchors and the explicit asset cache that
//! the editor screens own instead of process-wide registries.

pub mod anchor;
pub mod cache;

pub use anchor::{Anchor, AnchorPreset};
pub use cache::AssetCache;
