use std::str::FromStr;

use cadence_core::{AnimationSettings, CadenceError, Result};

use crate::values::{HermiteBasis, Interpolatable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    Linear,
    Step,
    CubicSpline,
}

impl InterpolationMode {
    /// Number of stored values per keyframe: `[in_tangent, value, out_tangent]`
    /// for cubic splines, a single value otherwise.
    #[inline]
    #[must_use]
    pub const fn values_per_keyframe(self) -> usize {
        match self {
            InterpolationMode::CubicSpline => 3,
            InterpolationMode::Linear | InterpolationMode::Step => 1,
        }
    }
}

/// Parses the glTF sampler names `LINEAR`, `STEP` and `CUBICSPLINE`.
impl FromStr for InterpolationMode {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "LINEAR" => Ok(InterpolationMode::Linear),
            "STEP" => Ok(InterpolationMode::Step),
            "CUBICSPLINE" => Ok(InterpolationMode::CubicSpline),
            other => Err(CadenceError::UnknownInterpolation(other.to_string())),
        }
    }
}

/// Remembers the last segment a track was sampled in, so sequential playback
/// finds the next segment with a short forward scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// One keyframe track. Immutable once built.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    times: Vec<f32>,
    values: Vec<T>, // For CubicSpline, length is times.len() * 3
    interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    /// Builds a track without validating it. A track whose value count does
    /// not match its time stamps is kept but never evaluated; see
    /// [`KeyframeTrack::validate`].
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
    pub fn times(&self) -> &[f32] {
        &self.times
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    #[inline]
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    #[inline]
    #[must_use]
    pub fn keyframe_count(&self) -> usize {
        self.times.len()
    }

    #[inline]
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.times.len().saturating_sub(1)
    }

    /// Checks that there is exactly one logical value per time stamp and
    /// that the time stamps are in non-decreasing order.
    pub fn validate(&self) -> Result<()> {
        let per_keyframe = self.interpolation.values_per_keyframe();
        let logical = self.values.len() / per_keyframe;

        if self.values.len() % per_keyframe != 0 || logical != self.times.len() {
            return Err(CadenceError::MalformedTrack {
                times: self.times.len(),
                values: logical,
            });
        }

        if let Some(index) = self.times.iter().position(|t| t.is_nan()) {
            return Err(CadenceError::UnorderedKeyframes { index });
        }
        if let Some(index) = self.times.windows(2).position(|w| w[1] < w[0]) {
            return Err(CadenceError::UnorderedKeyframes { index: index + 1 });
        }

        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.validate().is_ok()
    }

    /// Smallest and largest time stamp, or `None` for an empty track.
    #[must_use]
    pub fn time_range(&self) -> Option<(f32, f32)> {
        if self.times.is_empty() {
            return None;
        }
        Some(
            self.times
                .iter()
                .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &t| {
                    (lo.min(t), hi.max(t))
                }),
        )
    }

    /// Finds the first segment `i`, in ascending order, with
    /// `times[i] <= time <= times[i + 1]` whose duration is not degenerate.
    ///
    /// Both bounds are inclusive, so a time on a shared boundary resolves to
    /// the earlier segment. Degenerate segments containing `time` are passed
    /// over; if only degenerate segments contain it, the first of them is
    /// returned as [`CadenceError::DegenerateSegment`]. Times outside the
    /// track return `Ok(None)`.
    ///
    /// Expects ordered time stamps; see [`KeyframeTrack::validate`].
    pub fn find_segment(&self, time: f32, settings: &AnimationSettings) -> Result<Option<usize>> {
        if self.times.len() < 2 || time.is_nan() {
            return Ok(None);
        }

        self.first_usable_segment(self.first_reaching(time), time, settings)
    }

    /// Same result as [`KeyframeTrack::find_segment`], using the cursor as a
    /// starting hint.
    ///
    /// Scans up to `settings.cursor_scan_window` segments forward from the
    /// cached segment and falls back to a binary search for backward or long
    /// jumps.
    pub fn find_segment_with_cursor(
        &self,
        time: f32,
        cursor: &mut KeyframeCursor,
        settings: &AnimationSettings,
    ) -> Result<Option<usize>> {
        if self.times.len() < 2 || time.is_nan() {
            return Ok(None);
        }

        let last_segment = self.times.len() - 2;
        let start = cursor.last_index.min(last_segment);

        // An earlier segment can only contain `time` if it ends exactly on it.
        let hinted = if self.times[start] < time || (start == 0 && self.times[0] <= time) {
            let window_end = start
                .saturating_add(settings.cursor_scan_window)
                .min(last_segment);
            (start..=window_end).find(|&index| time <= self.times[index + 1])
        } else {
            None
        };
        let first = hinted.unwrap_or_else(|| self.first_reaching(time));

        let found = self.first_usable_segment(first, time, settings)?;
        if let Some(index) = found {
            cursor.last_index = index;
        }
        Ok(found)
    }

    /// First segment whose right edge reaches `time`.
    fn first_reaching(&self, time: f32) -> usize {
        self.times[1..].partition_point(|&t| t < time)
    }

    /// Walks forward from `first` over the segments containing `time` and
    /// returns the first one that is not degenerate.
    fn first_usable_segment(
        &self,
        first: usize,
        time: f32,
        settings: &AnimationSettings,
    ) -> Result<Option<usize>> {
        let mut skipped = None;

        for index in first..self.times.len() - 1 {
            let start = self.times[index];
            let end = self.times[index + 1];
            if start > time {
                break;
            }
            if settings.is_degenerate(end - start) {
                log::trace!("Passing over degenerate segment {index} [{start}, {end}] at t={time}");
                skipped.get_or_insert(CadenceError::DegenerateSegment { index, start, end });
                continue;
            }
            return Ok(Some(index));
        }

        skipped.map_or(Ok(None), Err)
    }

    /// Number of segments whose duration is degenerate under `settings`.
    #[must_use]
    pub fn degenerate_segment_count(&self, settings: &AnimationSettings) -> usize {
        self.times
            .windows(2)
            .filter(|w| settings.is_degenerate(w[1] - w[0]))
            .count()
    }

    /// Normalized position of `time` inside segment `index`, clamped below at 0.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid segment index.
    pub fn fraction(&self, index: usize, time: f32, settings: &AnimationSettings) -> Result<f32> {
        let t0 = self.times[index];
        let t1 = self.times[index + 1];
        let delta = t1 - t0;

        if settings.is_degenerate(delta) {
            return Err(CadenceError::DegenerateSegment {
                index,
                start: t0,
                end: t1,
            });
        }

        Ok((time - t0).max(0.0) / delta)
    }

    /// Evaluates segment `index` at `time` with the track's interpolation mode.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid segment index of a well-formed track.
    pub fn evaluate(&self, index: usize, time: f32, settings: &AnimationSettings) -> Result<T> {
        let next_idx = index + 1;

        let value = match self.interpolation {
            InterpolationMode::Step => *self.value_at(index),
            InterpolationMode::Linear => {
                let t = self.fraction(index, time, settings)?;
                T::interpolate_linear(self.value_at(index), self.value_at(next_idx), t)
            }
            InterpolationMode::CubicSpline => {
                let t = self.fraction(index, time, settings)?;
                let dt = self.times[next_idx] - self.times[index];
                let basis = HermiteBasis::new(t, settings.hermite);

                let i_prev = index * 3;
                let i_next = next_idx * 3;

                let v0 = &self.values[i_prev + 1];
                let out_tangent0 = &self.values[i_prev + 2];
                let in_tangent1 = &self.values[i_next];
                let v1 = &self.values[i_next + 1];

                T::interpolate_cubic(v0, out_tangent0, in_tangent1, v1, &basis, dt)
            }
        };

        value
            .finalize()
            .ok_or(CadenceError::DegenerateRotation { index })
    }

    /// Samples the track at `time`.
    ///
    /// Returns `Ok(None)` when no segment contains `time` or the fraction
    /// exceeds `settings.max_fraction`.
    pub fn sample(&self, time: f32, settings: &AnimationSettings) -> Result<Option<T>> {
        self.validate()?;
        match self.find_segment(time, settings)? {
            Some(index) => self.sample_segment(index, time, settings),
            None => Ok(None),
        }
    }

    /// Cursor-accelerated [`KeyframeTrack::sample`]. Results are identical.
    pub fn sample_with_cursor(
        &self,
        time: f32,
        cursor: &mut KeyframeCursor,
        settings: &AnimationSettings,
    ) -> Result<Option<T>> {
        self.validate()?;
        match self.find_segment_with_cursor(time, cursor, settings)? {
            Some(index) => self.sample_segment(index, time, settings),
            None => Ok(None),
        }
    }

    fn sample_segment(
        &self,
        index: usize,
        time: f32,
        settings: &AnimationSettings,
    ) -> Result<Option<T>> {
        let u = self.fraction(index, time, settings)?;
        if u > settings.max_fraction {
            return Ok(None);
        }
        self.evaluate(index, time, settings).map(Some)
    }

    /// For Linear/Step, the index is used directly.
    /// For CubicSpline, the value is at index * 3 + 1.
    fn value_at(&self, index: usize) -> &T {
        match self.interpolation {
            InterpolationMode::CubicSpline => &self.values[index * 3 + 1],
            InterpolationMode::Linear | InterpolationMode::Step => &self.values[index],
        }
    }
}
