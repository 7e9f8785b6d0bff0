//! Keyframe animation: tracks, clips, actions and the mixer that drives them.

pub mod action;
pub mod binding;
pub mod clip;
pub mod mixer;
pub mod tracks;
mod values;

pub use action::{AnimationAction, TrackValue};
pub use binding::{NullPoseTarget, PoseTarget, TargetPath};
pub use clip::{AnimationClip, Track, TrackData, TrackMeta};
pub use mixer::{ActionId, AnimationMixer};
pub use tracks::{InterpolationMode, KeyframeTrack};
pub use values::Interpolatable;
