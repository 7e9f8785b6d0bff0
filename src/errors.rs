//! Error Types
//!
//! This module defines the error types used throughout the viewer core.
//!
//! # Overview
//!
//! The main error type [`ViewerError`] covers every failure mode:
//! - Asset loading failures reported by the host loader ([`AssetLoadError`])
//! - Malformed catalogs or unusable animation tracks ([`ClipExtractionError`])
//! - Rejected clip selections (out of range, skipped entry, nothing loaded,
//!   no clips)
//! - Catalog document parsing and I/O
//!
//! None of these cross the render-loop boundary: per-frame entry points log
//! the error through the `log` facade and keep going.
//!
//! ```rust,ignore
//! use clipdeck::errors::{Result, ViewerError};
//!
//! fn load_catalog() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the viewer core.
#[derive(Error, Debug)]
pub enum ViewerError {
    // ========================================================================
    // Loading & Extraction
    // ========================================================================
    /// The model could not be fetched or parsed.
    #[error("Asset load failed: {0}")]
    AssetLoad(#[from] AssetLoadError),

    /// The catalog or the source track cannot produce playable clips.
    #[error("Clip extraction failed: {0}")]
    ClipExtraction(#[from] ClipExtractionError),

    // ========================================================================
    // Selection
    // ========================================================================
    /// `select` was called with an index outside the catalog.
    #[error("Clip index out of range: {index} (clips: {len})")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Number of catalog slots
        len: usize,
    },

    /// The index names a catalog entry whose extraction was skipped.
    #[error("Clip {index} is unavailable (extraction was skipped)")]
    ClipUnavailable {
        /// The rejected index
        index: usize,
    },

    /// A selection arrived before the asset finished loading.
    #[error("No animated asset is loaded yet")]
    NotLoaded,

    /// The asset loaded, but no clips could be built from it.
    #[error("The loaded asset has no playable clips")]
    NoClips,

    // ========================================================================
    // Configuration & I/O
    // ========================================================================
    /// Catalog or settings document is not valid JSON for its schema.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Failure reported by the host asset loader. Terminal: there is no retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetLoadError {
    /// Network or file-system failure while fetching the model.
    #[error("failed to fetch '{path}': {reason}")]
    Fetch {
        /// Requested asset path or URL
        path: String,
        /// Loader-provided description
        reason: String,
    },

    /// The model was fetched but could not be decoded.
    #[error("failed to parse '{path}': {reason}")]
    Parse {
        /// Requested asset path or URL
        path: String,
        /// Loader-provided description
        reason: String,
    },

    /// The loader went away without reporting success or failure.
    #[error("loader for '{path}' stopped without a result")]
    Abandoned {
        /// Requested asset path or URL
        path: String,
    },
}

/// Reasons a catalog cannot be cut out of a source track.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipExtractionError {
    /// The catalog has no entries.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// The sample rate is zero, negative or not finite.
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(f32),

    /// The catalog document declares a schema version this build cannot read.
    #[error("unsupported catalog version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the document
        found: u32,
        /// Version this build reads
        expected: u32,
    },

    /// Two entries share a name.
    #[error("duplicate clip name '{0}'")]
    DuplicateName(String),

    /// An entry's end frame is not after its start frame.
    #[error("clip '{name}' has an empty frame range [{start}, {end})")]
    InvalidRange {
        /// Clip name
        name: String,
        /// Start frame (inclusive)
        start: u32,
        /// End frame (exclusive)
        end: u32,
    },

    /// The source track has zero duration.
    #[error("source track '{0}' has zero duration")]
    ZeroDurationTrack(String),

    /// The source track carries no keyframe data at all.
    #[error("source track '{0}' has no animated channels")]
    NoAnimatedTracks(String),

    /// An entry ends after the last keyframe of the source track.
    #[error("clip '{name}' ends at {end_time:.3}s, beyond the source duration {duration:.3}s")]
    BeyondTrack {
        /// Clip name
        name: String,
        /// Requested end time in seconds
        end_time: f32,
        /// Source track duration in seconds
        duration: f32,
    },
}

/// Alias for `Result<T, ViewerError>`.
pub type Result<T> = std::result::Result<T, ViewerError>;
