use serde::{Deserialize, Serialize};

/// Directory the replacement textures are served from.
pub const DEFAULT_TEXTURE_BASE_PATH: &str = "60kw Generator Ver 2/";

/// Replacement texture files shipped with the reference asset.
pub const DEFAULT_TEXTURE_NAMES: [&str; 3] = [
    "lambert1_2D_View_1001.png",
    "lambert1_2D_View_1002.png",
    "lambert1_2D_View_1003.png",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorSpace {
    Srgb,
    #[default]
    Linear,
}

/// The color map bound to a material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRef {
    /// Name or source file recorded in the model.
    pub name: String,
    /// Path to fetch the texture from, once remapped.
    pub path: Option<String>,
    pub color_space: ColorSpace,
}

impl TextureRef {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            color_space: ColorSpace::Linear,
        }
    }
}

/// One material of the loaded model, reduced to what retexturing touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialSlot {
    pub name: String,
    pub map: Option<TextureRef>,
    /// Set when the host must rebuild the material's GPU state.
    pub needs_update: bool,
}

impl MaterialSlot {
    #[must_use]
    pub fn new(name: impl Into<String>, map: Option<TextureRef>) -> Self {
        Self {
            name: name.into(),
            map,
            needs_update: false,
        }
    }
}

/// Points embedded texture references at externally served files.
///
/// A material's map is replaced by the first known file whose name, with or
/// without its extension, occurs in the map's recorded name. Materials without
/// a map, or without a match, are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureRemap {
    pub base_path: String,
    pub names: Vec<String>,
}

impl Default for TextureRemap {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_TEXTURE_BASE_PATH.to_string(),
            names: DEFAULT_TEXTURE_NAMES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TextureRemap {
    /// The known file matching `recorded_name`, first match wins.
    #[must_use]
    pub fn resolve(&self, recorded_name: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|file| {
                let stem = file.rsplit_once('.').map_or(file.as_str(), |(stem, _)| stem);
                recorded_name.contains(file.as_str()) || recorded_name.contains(stem)
            })
            .map(String::as_str)
    }

    /// Rewrites matching maps in place. Returns how many materials changed.
    pub fn apply(&self, materials: &mut [MaterialSlot]) -> usize {
        let mut changed = 0;
        for material in materials {
            let Some(map) = material.map.as_mut() else {
                continue;
            };
            let Some(file) = self.resolve(&map.name) else {
                continue;
            };

            map.path = Some(format!("{}{}", self.base_path, file));
            map.color_space = ColorSpace::Srgb;
            material.needs_update = true;
            changed += 1;
        }
        changed
    }
}
