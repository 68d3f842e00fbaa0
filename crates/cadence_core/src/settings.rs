//! Animation Settings & Numeric Tolerances
//!
//! Every floating-point comparison made while sampling keyframes goes through
//! a named constant or a field of [`AnimationSettings`], so the tolerance
//! policy can be inspected and tested directly.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cadence::settings::{AnimationSettings, HermiteTangents};
//!
//! // Default: standard Hermite spline, 1e-6 degenerate-segment threshold
//! let settings = AnimationSettings::default();
//!
//! // Reproduce the legacy cubic evaluation for parity tests
//! let legacy = AnimationSettings::default().with_hermite(HermiteTangents::Legacy);
//! ```

/// Segments at or below this duration are rejected instead of divided.
pub const DEGENERATE_SEGMENT_EPSILON: f32 = 1e-6;

/// Maximum deviation from unit length accepted for evaluated rotations.
pub const UNIT_QUAT_TOLERANCE: f32 = 1e-5;

/// Quaternions with a squared length below this cannot be normalized.
pub const MIN_QUAT_LENGTH_SQUARED: f32 = 1e-12;

/// Number of segments the cursor scans forward before falling back to a
/// binary search.
pub const DEFAULT_CURSOR_SCAN_WINDOW: usize = 3;

// ---------------------------------------------------------------------------
// HermiteTangents
// ---------------------------------------------------------------------------

/// Selects which tangent feeds the last basis term of the cubic spline.
///
/// | Variant    | Last term            |
/// |------------|----------------------|
/// | `Standard` | `(t³ - t²) · m1`     |
/// | `Legacy`   | `(t³ - t²) · m0`     |
///
/// `Legacy` reproduces an older evaluator that reused the out-tangent of the
/// left keyframe. It exists for byte-for-byte parity with previously baked
/// output and is a known deviation from the Hermite formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HermiteTangents {
    #[default]
    Standard,
    Legacy,
}

// ---------------------------------------------------------------------------
// AnimationSettings
// ---------------------------------------------------------------------------

/// Tunables shared by every track of a clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    /// Cubic spline tangent policy.
    pub hermite: HermiteTangents,
    /// Segment durations at or below this value are degenerate.
    pub degenerate_segment_epsilon: f32,
    /// Segments are only evaluated while the fraction stays at or below this.
    pub max_fraction: f32,
    /// Forward scan length of the keyframe cursor.
    pub cursor_scan_window: usize,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            hermite: HermiteTangents::Standard,
            degenerate_segment_epsilon: DEGENERATE_SEGMENT_EPSILON,
            max_fraction: 1.0,
            cursor_scan_window: DEFAULT_CURSOR_SCAN_WINDOW,
        }
    }
}

impl AnimationSettings {
    #[must_use]
    pub fn with_hermite(mut self, hermite: HermiteTangents) -> Self {
        self.hermite = hermite;
        self
    }

    #[must_use]
    pub fn with_degenerate_segment_epsilon(mut self, epsilon: f32) -> Self {
        self.degenerate_segment_epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_max_fraction(mut self, max_fraction: f32) -> Self {
        self.max_fraction = max_fraction;
        self
    }

    #[must_use]
    pub fn with_cursor_scan_window(mut self, window: usize) -> Self {
        self.cursor_scan_window = window;
        self
    }

    /// Returns `true` if a segment of the given duration must not be divided.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self, duration: f32) -> bool {
        duration.is_nan() || duration <= self.degenerate_segment_epsilon
    }
}
