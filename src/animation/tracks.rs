use crate::animation::values::Interpolatable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
    CubicSpline,
}

/// Time-sorted keyframes for one animated channel.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>, // For CubicSpline, length is times.len() * 3
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        Self {
            times,
            values,
            interpolation,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time of the last keyframe, or zero for an empty track.
    #[inline]
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Samples the track at `time`, clamping to the first/last keyframe outside its range.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // First index whose time is strictly after `time`
        let next_idx = self.times.partition_point(|&t| t <= time);
        if next_idx == 0 {
            return Some(self.value_at(0).clone());
        }

        Some(self.sample_at_frame(next_idx - 1, time))
    }

    /// Value held just before `time` (left limit). Differs from [`sample`](Self::sample)
    /// only for step tracks with a keyframe exactly at `time`.
    fn value_before(&self, time: f32) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        match self.interpolation {
            InterpolationMode::Step => {
                let idx = self.times.partition_point(|&t| t < time);
                Some(self.value_at(idx.saturating_sub(1)).clone())
            }
            _ => self.sample(time),
        }
    }

    /// Cuts the window `[start, end]` (seconds) out of this track, rebased so the
    /// window starts at zero.
    ///
    /// Boundary keyframes are synthesized by sampling, so the result always spans
    /// exactly `end - start`. Keyframes strictly inside the window are copied as-is.
    /// Cubic tracks are resampled at `fps` into a linear track, since their tangents
    /// cannot be split at arbitrary times.
    #[must_use]
    pub fn slice(&self, start: f32, end: f32, fps: f32) -> Option<Self> {
        if self.is_empty() || end <= start {
            return None;
        }

        if self.interpolation == InterpolationMode::CubicSpline {
            return Some(self.resample(start, end, fps));
        }

        let first = self.sample(start)?;
        let last = self.value_before(end)?;

        let lo = self.times.partition_point(|&t| t <= start);
        let hi = self.times.partition_point(|&t| t < end);

        let inner = hi.saturating_sub(lo);
        let mut times = Vec::with_capacity(inner + 2);
        let mut values = Vec::with_capacity(inner + 2);

        times.push(0.0);
        values.push(first);
        for i in lo..hi {
            times.push(self.times[i] - start);
            values.push(self.value_at(i).clone());
        }
        times.push(end - start);
        values.push(last);

        Some(Self::new(times, values, self.interpolation))
    }

    fn resample(&self, start: f32, end: f32, fps: f32) -> Self {
        let span = end - start;
        let steps = (span * fps).ceil().max(1.0) as usize;

        let mut times = Vec::with_capacity(steps + 1);
        let mut values = Vec::with_capacity(steps + 1);
        for k in 0..=steps {
            let t = (k as f32 / fps).min(span);
            if let Some(v) = self.sample(start + t) {
                times.push(t);
                values.push(v);
            }
        }

        Self::new(times, values, InterpolationMode::Linear)
    }

    /// For CubicSpline the value sits in the middle of each `[in, value, out]` triple.
    fn value_at(&self, index: usize) -> &T {
        match self.interpolation {
            InterpolationMode::CubicSpline => &self.values[index * 3 + 1],
            _ => &self.values[index],
        }
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();
        if index >= len - 1 {
            return self.value_at(len - 1).clone();
        }

        let next_idx = index + 1;
        let t0 = self.times[index];
        let t1 = self.times[next_idx];
        let dt = t1 - t0;

        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        match self.interpolation {
            InterpolationMode::Step => self.value_at(index).clone(),
            InterpolationMode::Linear => {
                T::interpolate_linear(self.value_at(index), self.value_at(next_idx), t)
            }
            InterpolationMode::CubicSpline => {
                let i_prev = index * 3;
                let i_next = next_idx * 3;

                T::interpolate_cubic(
                    &self.values[i_prev + 1],
                    &self.values[i_prev + 2],
                    &self.values[i_next],
                    &self.values[i_next + 1],
                    t,
                    dt,
                )
            }
        }
    }
}
