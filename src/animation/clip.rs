use glam::{Quat, Vec3};

use crate::animation::binding::TargetPath;
use crate::animation::tracks::KeyframeTrack;
use crate::errors::ClipExtractionError;

/// A clip may end at most this many frames past the last source keyframe.
const END_FRAME_TOLERANCE: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct TrackMeta {
    pub node_name: String,
    pub target: TargetPath,
}

#[derive(Debug, Clone)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
    Scalar(KeyframeTrack<f32>),
}

impl TrackData {
    #[must_use]
    pub fn end_time(&self) -> f32 {
        match self {
            TrackData::Vector3(t) => t.end_time(),
            TrackData::Quaternion(t) => t.end_time(),
            TrackData::Scalar(t) => t.end_time(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            TrackData::Vector3(t) => t.is_empty(),
            TrackData::Quaternion(t) => t.is_empty(),
            TrackData::Scalar(t) => t.is_empty(),
        }
    }

    fn slice(&self, start: f32, end: f32, fps: f32) -> Option<Self> {
        Some(match self {
            TrackData::Vector3(t) => TrackData::Vector3(t.slice(start, end, fps)?),
            TrackData::Quaternion(t) => TrackData::Quaternion(t.slice(start, end, fps)?),
            TrackData::Scalar(t) => TrackData::Scalar(t.slice(start, end, fps)?),
        })
    }
}

/// A full track definition: metadata plus keyframe data.
#[derive(Debug, Clone)]
pub struct Track {
    pub meta: TrackMeta,
    pub data: TrackData,
}

#[derive(Debug, Clone)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    /// Creates a clip whose duration is the latest keyframe across all tracks.
    #[must_use]
    pub fn new(name: String, tracks: Vec<Track>) -> Self {
        let duration = tracks
            .iter()
            .map(|t| t.data.end_time())
            .fold(0.0_f32, f32::max);

        Self {
            name,
            duration,
            tracks,
        }
    }

    /// Extracts the frame window `[start_frame, end_frame)` at `fps` as a new,
    /// independently playable clip starting at time zero.
    ///
    /// The result lasts exactly `(end_frame - start_frame) / fps` seconds. Windows may
    /// overlap other windows freely; the source clip is never modified.
    pub fn subclip(
        &self,
        name: &str,
        start_frame: u32,
        end_frame: u32,
        fps: f32,
    ) -> Result<AnimationClip, ClipExtractionError> {
        if !(fps.is_finite() && fps > 0.0) {
            return Err(ClipExtractionError::InvalidSampleRate(fps));
        }
        if end_frame <= start_frame {
            return Err(ClipExtractionError::InvalidRange {
                name: name.to_string(),
                start: start_frame,
                end: end_frame,
            });
        }
        if self.duration <= 0.0 {
            return Err(ClipExtractionError::ZeroDurationTrack(self.name.clone()));
        }

        let start = start_frame as f32 / fps;
        let end = end_frame as f32 / fps;
        if end > self.duration + END_FRAME_TOLERANCE / fps {
            return Err(ClipExtractionError::BeyondTrack {
                name: name.to_string(),
                end_time: end,
                duration: self.duration,
            });
        }

        let tracks: Vec<Track> = self
            .tracks
            .iter()
            .filter_map(|track| {
                track.data.slice(start, end, fps).map(|data| Track {
                    meta: track.meta.clone(),
                    data,
                })
            })
            .collect();

        if tracks.is_empty() {
            return Err(ClipExtractionError::NoAnimatedTracks(self.name.clone()));
        }

        Ok(AnimationClip::new(name.to_string(), tracks))
    }
}
