//! # clipdeck
//!
//! Viewer core for a single rigged asset whose animation is baked into one
//! long track. A catalog of named frame windows is cut out of that track and
//! exposed as clip buttons, on a desktop list and on an in-world VR panel.
//! At most one clip plays at a time.
//!
//! Rendering, windowing and XR session plumbing belong to the host engine.
//! The host feeds this crate load events, controller poses and frame deltas,
//! and receives sampled poses through [`PoseTarget`].
//!
//! # Modules
//!
//! - [`catalog`]: clip definitions and the versioned catalog document
//! - [`animation`]: keyframe tracks, clips, actions, mixer
//! - [`playback`]: the single-active-clip controller
//! - [`ui`]: desktop list, VR panel, ray picking, highlight rules
//! - [`assets`]: load events, bounds, texture remapping
//! - [`scene`]: framing and presentation environment
//! - [`viewer`]: the per-frame glue

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod assets;
pub mod catalog;
pub mod errors;
pub mod input;
pub mod playback;
pub mod scene;
pub mod settings;
pub mod ui;
pub mod viewer;

pub use animation::{
    AnimationAction, AnimationClip, AnimationMixer, PoseTarget, TargetPath, TrackValue,
};
pub use assets::{BoundingBox, LoadChannel, LoadEvent, LoadReporter, LoadedAsset, TextureRemap};
pub use catalog::{ClipCatalog, ClipDefinition};
pub use errors::{AssetLoadError, ClipExtractionError, Result, ViewerError};
pub use input::{ControllerPose, XrInput};
pub use playback::{PlaybackController, PlaybackState, SelectionChange, SelectionObserver};
pub use scene::{Environment, Framing, PresentationMode};
pub use settings::ViewerSettings;
pub use ui::{DesktopPanel, HighlightState, Ray, VrPanel};
pub use viewer::{LoadState, Viewer};
