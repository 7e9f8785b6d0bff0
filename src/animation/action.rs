use std::sync::Arc;

use crate::animation::clip::{AnimationClip, TrackData};

/// Play-once state of one clip: its local clock and whether the mixer should
/// currently drive it.
///
/// The clock runs from zero to the clip duration and stops there. What happens
/// at the end depends on `clamp_when_finished`.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    /// Hold the last pose at the end instead of disabling the action.
    pub clamp_when_finished: bool,
    pub paused: bool,
    pub enabled: bool,

    running: bool,
    finished: bool,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        Self {
            clip,
            time: 0.0,
            clamp_when_finished: false,
            paused: false,
            enabled: true,
            running: false,
            finished: false,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[inline]
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.clip.duration
    }

    /// Schedules the action. Does not touch the local clock.
    pub fn play(&mut self) -> &mut Self {
        self.running = true;
        self
    }

    /// Unschedules the action and rewinds it.
    pub fn stop(&mut self) -> &mut Self {
        self.running = false;
        self.reset()
    }

    /// Rewinds to time zero and clears pause/finished state.
    pub fn reset(&mut self) -> &mut Self {
        self.time = 0.0;
        self.paused = false;
        self.enabled = true;
        self.finished = false;
        self
    }

    /// Whether the action is scheduled, including while holding a clamped final pose.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the clock reached the end of the clip.
    #[inline]
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advances the local clock by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.running || self.paused || !self.enabled {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time = (self.time + dt).clamp(0.0, duration);
        if self.time >= duration {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        if self.clamp_when_finished {
            self.paused = true;
        } else {
            self.enabled = false;
        }
    }

    /// Whether the mixer should write this action's pose into the scene.
    #[inline]
    #[must_use]
    pub fn contributes(&self) -> bool {
        self.running && self.enabled
    }

    /// Samples track `track_index` of the clip at the local clock.
    #[must_use]
    pub fn sample_track(&self, track_index: usize) -> Option<TrackValue> {
        let track = self.clip.tracks.get(track_index)?;

        Some(match &track.data {
            TrackData::Vector3(t) => TrackValue::Vector3(t.sample(self.time)?),
            TrackData::Quaternion(t) => TrackValue::Quaternion(t.sample(self.time)?),
            TrackData::Scalar(t) => TrackValue::Scalar(t.sample(self.time)?),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackValue {
    Vector3(glam::Vec3),
    Quaternion(glam::Quat),
    Scalar(f32),
}
