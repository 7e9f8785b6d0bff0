//! Viewer Settings
//!
//! Everything about the viewer that is configuration rather than state.
//!
//! | Field              | Description                                   | Default                   |
//! |--------------------|-----------------------------------------------|---------------------------|
//! | `textures`         | Texture base path and known replacement files | `60kw Generator Ver 2/`   |
//! | `panel`            | VR panel grid                                 | 2 columns, 0.5 × 0.12 m   |
//! | `palette`          | VR button colors                              | normal / hovered / active |
//! | `background_color` | Desktop background (linear RGB)               | `#1a1a2e`                 |
//!
//! ```rust,ignore
//! use clipdeck::ViewerSettings;
//!
//! let settings = ViewerSettings::from_json(r#"{ "panel": { "columns": 2, "margin": 0.5 } }"#)?;
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::assets::TextureRemap;
use crate::errors::Result;
use crate::ui::{HighlightPalette, PanelLayout};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub textures: TextureRemap,
    pub panel: PanelLayout,
    pub palette: HighlightPalette,
    pub background_color: Vec3,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            textures: TextureRemap::default(),
            panel: PanelLayout::default(),
            palette: HighlightPalette::default(),
            background_color: Vec3::new(0.102, 0.102, 0.180),
        }
    }
}

impl ViewerSettings {
    /// Parses settings; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
