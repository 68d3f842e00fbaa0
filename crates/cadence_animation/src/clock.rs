use cadence_core::{CadenceError, Result};

/// Time range covered by the keyframes of a clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipBounds {
    pub start: f32,
    pub end: f32,
}

impl ClipBounds {
    /// Bounds of a clip without keyframes: `start = +∞`, `end = -∞`.
    pub const EMPTY: Self = Self {
        start: f32::INFINITY,
        end: f32::NEG_INFINITY,
    };

    /// Widens the bounds to cover `[start, end]`.
    pub fn include(&mut self, start: f32, end: f32) {
        self.start = self.start.min(start);
        self.end = self.end.max(end);
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.end - self.start
        }
    }
}

impl Default for ClipBounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Looping playback clock.
///
/// Time only moves forward. Once it passes `bounds.end` it restarts at
/// exactly 0, whatever the overshoot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackClock {
    time: f32,
    bounds: ClipBounds,
}

impl PlaybackClock {
    #[must_use]
    pub fn new(bounds: ClipBounds) -> Self {
        Self { time: 0.0, bounds }
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> ClipBounds {
        self.bounds
    }

    /// Advances the clock by `dt` seconds. Returns `true` if the clock wrapped.
    ///
    /// Negative and non-finite deltas are rejected and leave the clock as is.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Ignoring playback delta {dt}: clips only play forward");
            return false;
        }

        self.time += dt;
        self.wrap()
    }

    /// Jumps to `time`, applying the same wrap rule as [`PlaybackClock::advance`].
    pub fn seek(&mut self, time: f32) -> Result<bool> {
        if !time.is_finite() || time < 0.0 {
            return Err(CadenceError::InvalidSeek(time));
        }

        self.time = time;
        Ok(self.wrap())
    }

    fn wrap(&mut self) -> bool {
        if self.time > self.bounds.end {
            self.time = 0.0;
            true
        } else {
            false
        }
    }
}
