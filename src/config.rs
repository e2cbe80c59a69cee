//! Editor configuration (`editor.toml`).
//!
//! Every field has a default, so a missing file or a file that only sets a
//! few keys both work.

use crate::animation::ClipManifest;
use crate::widgets::TextFieldConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_title() -> String {
    "Save Editor".into()
}
fn default_width() -> u32 {
    500
}
fn default_height() -> u32 {
    700
}
fn default_font() -> PathBuf {
    PathBuf::from("assets/font.ttf")
}
fn default_font_size() -> f32 {
    24.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_width")]
    pub width: u32,

    #[serde(default = "default_height")]
    pub height: u32,

    /// TTF/OTF font used for every text run in the window.
    #[serde(default = "default_font")]
    pub font: PathBuf,

    /// Pixel height of the field text.
    #[serde(default = "default_font_size")]
    pub font_size: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            font: default_font(),
            font_size: default_font_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub text_field: TextFieldConfig,

    /// Character animations shown in the character box.
    #[serde(default)]
    pub characters: Vec<ClipManifest>,
}

impl EditorConfig {
    /// Loads the config, falling back to defaults when the file is missing
    /// or broken.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("CONFIG: {} not found, using defaults", path.display());
            return Self::default();
        }
        load_toml(path).unwrap_or_default()
    }

    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content = toml::to_string_pretty(self).map_err(|e| e.to_string())?;
        log::info!("CONFIG: saving {}", path.display());
        fs::write(path, content).map_err(|e| e.to_string())
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    match toml::from_str(&content) {
        Ok(data) => Ok(data),
        Err(e) => {
            log::error!("Failed to parse TOML file {:?}: {}", path, e);
            Err(e.to_string())
        }
    }
}
