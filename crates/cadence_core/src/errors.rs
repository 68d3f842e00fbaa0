//! Error Types
//!
//! This module defines the error type shared by every Cadence crate.
//!
//! # Overview
//!
//! [`CadenceError`] covers the failure modes of keyframe data and channel
//! binding:
//! - Track data that cannot be evaluated (malformed, degenerate segments)
//! - Configuration errors detected while building tracks
//! - Binding errors detected while building clips
//!
//! Errors raised while a clip is ticking are isolated per channel: the clip
//! logs them and moves on to the next channel. Errors raised while building
//! tracks or clips are returned to the caller.
//!
//! ```rust,ignore
//! use cadence::errors::{CadenceError, Result};
//!
//! fn build() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::NodeHandle;

/// The main error type for the Cadence engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CadenceError {
    // ========================================================================
    // Track Data Errors
    // ========================================================================
    /// The number of time stamps does not match the number of keyframe values.
    #[error("Malformed track: {times} time stamps but {values} keyframe values")]
    MalformedTrack {
        /// Number of time stamps
        times: usize,
        /// Number of logical keyframe values
        values: usize,
    },

    /// A time stamp is NaN or earlier than the one before it.
    #[error("Unordered keyframes: time stamp {index} is NaN or earlier than its predecessor")]
    UnorderedKeyframes {
        /// Index of the offending time stamp
        index: usize,
    },

    /// A segment with zero (or near-zero) duration was selected for evaluation.
    #[error("Degenerate segment {index}: [{start}, {end}] has no duration")]
    DegenerateSegment {
        /// Segment index (the left keyframe)
        index: usize,
        /// Left time stamp
        start: f32,
        /// Right time stamp
        end: f32,
    },

    /// A rotation evaluated to a quaternion that cannot be normalized.
    #[error("Degenerate rotation in segment {index}: quaternion has zero length")]
    DegenerateRotation {
        /// Segment index that produced the value
        index: usize,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// The interpolation mode name is not recognised.
    #[error("Unknown interpolation mode: {0}")]
    UnknownInterpolation(String),

    /// A raw output buffer is not a whole number of elements.
    #[error("Output buffer of {len} floats is not divisible by stride {stride}")]
    InvalidStride {
        /// Buffer length in floats
        len: usize,
        /// Expected element stride
        stride: usize,
    },

    // ========================================================================
    // Binding Errors
    // ========================================================================
    /// A channel references a track the clip does not own.
    #[error("Track index out of bounds: {index} (clip has {len} tracks)")]
    TrackIndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Number of tracks in the clip
        len: usize,
    },

    /// A channel references a node that is not in the node table.
    #[error("Channel {channel} targets missing node {node:?}")]
    DanglingNode {
        /// Channel index within the clip
        channel: usize,
        /// The dangling handle
        node: NodeHandle,
    },

    /// A node name could not be resolved while binding.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// The track value type does not fit the targeted property.
    #[error("Channel {channel} targets {target} but track {track} holds {kind} keyframes")]
    TargetMismatch {
        /// Channel index within the clip
        channel: usize,
        /// Track index
        track: usize,
        /// Targeted property
        target: &'static str,
        /// Value kind stored in the track
        kind: &'static str,
    },

    // ========================================================================
    // Playback Errors
    // ========================================================================
    /// `seek` was given a negative or non-finite time.
    #[error("Invalid seek time: {0}")]
    InvalidSeek(f32),
}

/// Alias for `Result<T, CadenceError>`.
pub type Result<T> = std::result::Result<T, CadenceError>;
