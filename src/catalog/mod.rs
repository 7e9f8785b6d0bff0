//! Clip Catalog
//!
//! A fixed, ordered table mapping human-readable clip names to frame windows
//! inside the single baked animation track of the loaded asset.
//!
//! # Overview
//!
//! - [`ClipDefinition`]: one `{name, start_frame, end_frame}` entry, end exclusive
//! - [`ClipCatalog`]: the ordered entries plus the sample rate used to turn
//!   frames into seconds
//! - [`CatalogDocument`]: the versioned JSON form, so a catalog can ship next to
//!   the asset instead of being compiled in
//!
//! Entries may overlap or appear out of order. Overlaps are reported as
//! warnings when a catalog is built and are never adjusted.

mod document;

pub use document::{CATALOG_VERSION, CatalogDocument};

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ClipExtractionError, Result};

/// Sample rate of the reference asset's baked track.
pub const DEFAULT_FPS: f32 = 30.0;

/// Frame windows baked into the generator service model.
const REFERENCE_CLIPS: [(&str, u32, u32); 19] = [
    ("Lf Door", 1, 200),
    ("Rt Door", 200, 400),
    ("Fuel Tank Door", 400, 600),
    ("Output Terminal Door", 600, 800),
    ("Control Cover", 800, 900),
    ("Back Door", 900, 1000),
    ("Air Filter 01", 1000, 1150),
    ("Air Filter 02", 1150, 1230),
    ("Air Filter 03", 1230, 1300),
    ("Air Filter 04", 1300, 1450),
    ("Oil Change 01", 1500, 1960),
    ("Oil Change 02", 1960, 2180),
    ("Oil Change 03", 2180, 2500),
    ("Oil Change 04", 2480, 2560),
    ("Oil Change 05", 2560, 2650),
    ("Serpentine Belt Removal 01", 2700, 2880),
    ("Serpentine Belt Removal 03", 2880, 3050),
    ("Serpentine Belt Removal 04", 3060, 3320),
    ("Coolant Flush 01", 3360, 3401),
];

/// A named frame window `[start_frame, end_frame)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipDefinition {
    pub name: String,
    #[serde(rename = "start")]
    pub start_frame: u32,
    #[serde(rename = "end")]
    pub end_frame: u32,
}

impl ClipDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, start_frame: u32, end_frame: u32) -> Self {
        Self {
            name: name.into(),
            start_frame,
            end_frame,
        }
    }

    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u32 {
        self.end_frame.saturating_sub(self.start_frame)
    }

    #[inline]
    #[must_use]
    pub fn start_seconds(&self, fps: f32) -> f32 {
        self.start_frame as f32 / fps
    }

    #[inline]
    #[must_use]
    pub fn end_seconds(&self, fps: f32) -> f32 {
        self.end_frame as f32 / fps
    }

    /// Whether the two half-open windows share at least one frame.
    #[must_use]
    pub fn overlaps(&self, other: &ClipDefinition) -> bool {
        self.start_frame < other.end_frame && other.start_frame < self.end_frame
    }

    fn validate(&self) -> std::result::Result<(), ClipExtractionError> {
        if self.end_frame <= self.start_frame {
            return Err(ClipExtractionError::InvalidRange {
                name: self.name.clone(),
                start: self.start_frame,
                end: self.end_frame,
            });
        }
        Ok(())
    }
}

/// Two catalog entries whose windows intersect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogOverlap {
    pub first: usize,
    pub second: usize,
    /// Number of frames shared by both windows.
    pub frames: u32,
}

/// The ordered, read-only clip table.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipCatalog {
    fps: f32,
    entries: Vec<ClipDefinition>,
}

impl ClipCatalog {
    /// Builds a validated catalog.
    ///
    /// Rejects an empty table, a non-positive sample rate, duplicate names and
    /// empty windows. Overlapping windows are accepted and logged.
    pub fn new(fps: f32, entries: Vec<ClipDefinition>) -> Result<Self> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(ClipExtractionError::InvalidSampleRate(fps).into());
        }
        if entries.is_empty() {
            return Err(ClipExtractionError::EmptyCatalog.into());
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            entry.validate()?;
            if !seen.insert(entry.name.as_str()) {
                return Err(ClipExtractionError::DuplicateName(entry.name.clone()).into());
            }
        }

        let catalog = Self { fps, entries };
        catalog.report_overlaps();
        Ok(catalog)
    }

    /// The 19-entry reference table at 30 fps.
    #[must_use]
    pub fn builtin() -> Self {
        let entries = REFERENCE_CLIPS
            .iter()
            .map(|&(name, start, end)| ClipDefinition::new(name, start, end))
            .collect();

        let catalog = Self {
            fps: DEFAULT_FPS,
            entries,
        };
        catalog.report_overlaps();
        catalog
    }

    /// Parses and validates a [`CatalogDocument`] from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        document.into_catalog()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[must_use]
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            version: CATALOG_VERSION,
            fps: self.fps,
            clips: self.entries.clone(),
        }
    }

    #[inline]
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ClipDefinition> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClipDefinition> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[ClipDefinition] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Every pair of entries whose windows intersect, in catalog order.
    #[must_use]
    pub fn overlaps(&self) -> Vec<CatalogOverlap> {
        let mut found = Vec::new();
        for (i, a) in self.entries.iter().enumerate() {
            for (j, b) in self.entries.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    let frames = a.end_frame.min(b.end_frame) - a.start_frame.max(b.start_frame);
                    found.push(CatalogOverlap {
                        first: i,
                        second: j,
                        frames,
                    });
                }
            }
        }
        found
    }

    fn report_overlaps(&self) {
        for overlap in self.overlaps() {
            let a = &self.entries[overlap.first];
            let b = &self.entries[overlap.second];
            log::warn!(
                "Catalog entries '{}' [{}, {}) and '{}' [{}, {}) share {} frame(s)",
                a.name,
                a.start_frame,
                a.end_frame,
                b.name,
                b.start_frame,
                b.end_frame,
                overlap.frames
            );
        }
    }
}

impl Default for ClipCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a ClipCatalog {
    type Item = &'a ClipDefinition;
    type IntoIter = std::slice::Iter<'a, ClipDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
