use serde::{Deserialize, Serialize};

use crate::catalog::{ClipCatalog, ClipDefinition, DEFAULT_FPS};
use crate::errors::{ClipExtractionError, Result};

/// Schema version written by [`ClipCatalog::to_document`].
pub const CATALOG_VERSION: u32 = 1;

fn default_fps() -> f32 {
    DEFAULT_FPS
}

/// On-disk catalog form.
///
/// ```json
/// {
///   "version": 1,
///   "fps": 30,
///   "clips": [ { "name": "Lf Door", "start": 1, "end": 200 } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub version: u32,
    #[serde(default = "default_fps")]
    pub fps: f32,
    pub clips: Vec<ClipDefinition>,
}

impl CatalogDocument {
    /// Checks the schema version, then validates the entries.
    pub fn into_catalog(self) -> Result<ClipCatalog> {
        if self.version != CATALOG_VERSION {
            return Err(ClipExtractionError::UnsupportedVersion {
                found: self.version,
                expected: CATALOG_VERSION,
            }
            .into());
        }
        ClipCatalog::new(self.fps, self.clips)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
