use std::ops::AddAssign;

use cadence_core::{AnimationSettings, CadenceError, Result};
use glam::{Quat, Vec3};
use rustc_hash::FxHashSet;

use crate::binding::{Channel, TargetPath};
use crate::clock::{ClipBounds, PlaybackClock};
use crate::target::{AnimatedTransform, NodeTable};
use crate::tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
use crate::values::Interpolatable;

#[derive(Debug, Clone)]
pub enum TrackData {
    Vector3(KeyframeTrack<Vec3>),
    Quaternion(KeyframeTrack<Quat>),
}

impl TrackData {
    /// Decodes a flat output buffer using the stride of `target`
    /// (3 floats for translation and scale, 4 for rotation).
    ///
    /// A buffer that is not a whole number of elements is rejected. A buffer
    /// whose element count does not match `times` still produces a track,
    /// which the clip will skip as malformed.
    pub fn from_raw(
        target: TargetPath,
        times: Vec<f32>,
        outputs: &[f32],
        interpolation: InterpolationMode,
    ) -> Result<Self> {
        let stride = target.stride();
        if outputs.len() % stride != 0 {
            return Err(CadenceError::InvalidStride {
                len: outputs.len(),
                stride,
            });
        }

        Ok(match target {
            TargetPath::Translation | TargetPath::Scale => TrackData::Vector3(KeyframeTrack::new(
                times,
                outputs.chunks_exact(stride).map(Vec3::from_slice).collect(),
                interpolation,
            )),
            TargetPath::Rotation => TrackData::Quaternion(KeyframeTrack::new(
                times,
                outputs.chunks_exact(stride).map(Quat::from_slice).collect(),
                interpolation,
            )),
        })
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            TrackData::Vector3(_) => Vec3::KIND,
            TrackData::Quaternion(_) => Quat::KIND,
        }
    }

    /// Whether values of this track can be written to `target`.
    #[must_use]
    pub fn fits(&self, target: TargetPath) -> bool {
        matches!(
            (self, target),
            (TrackData::Vector3(_), TargetPath::Translation | TargetPath::Scale)
                | (TrackData::Quaternion(_), TargetPath::Rotation)
        )
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            TrackData::Vector3(t) => t.validate(),
            TrackData::Quaternion(t) => t.validate(),
        }
    }

    #[must_use]
    pub fn time_range(&self) -> Option<(f32, f32)> {
        match self {
            TrackData::Vector3(t) => t.time_range(),
            TrackData::Quaternion(t) => t.time_range(),
        }
    }

    #[must_use]
    pub fn degenerate_segment_count(&self, settings: &AnimationSettings) -> usize {
        match self {
            TrackData::Vector3(t) => t.degenerate_segment_count(settings),
            TrackData::Quaternion(t) => t.degenerate_segment_count(settings),
        }
    }

    pub fn sample_with_cursor(
        &self,
        time: f32,
        cursor: &mut KeyframeCursor,
        settings: &AnimationSettings,
    ) -> Result<Option<TrackValue>> {
        Ok(match self {
            TrackData::Vector3(t) => t
                .sample_with_cursor(time, cursor, settings)?
                .map(TrackValue::Vector3),
            TrackData::Quaternion(t) => t
                .sample_with_cursor(time, cursor, settings)?
                .map(TrackValue::Quaternion),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackValue {
    Vector3(Vec3),
    Quaternion(Quat),
}

impl TrackValue {
    /// Writes the value into the `target` property. Returns `false` if the
    /// value kind does not fit the property.
    pub fn write_to<X: AnimatedTransform + ?Sized>(
        self,
        transform: &mut X,
        target: TargetPath,
    ) -> bool {
        match (self, target) {
            (TrackValue::Vector3(v), TargetPath::Translation) => transform.set_translation(v),
            (TrackValue::Vector3(v), TargetPath::Scale) => transform.set_scale(v),
            (TrackValue::Quaternion(q), TargetPath::Rotation) => transform.set_rotation(q),
            _ => return false,
        }
        true
    }
}

/// Per-tick outcome of [`AnimationClip::apply`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Channels that wrote a value.
    pub applied: usize,
    /// Channels whose track has no segment at the current time.
    pub idle: usize,
    /// Channels skipped because of an error (malformed track, degenerate
    /// segment or rotation, missing node).
    pub skipped: usize,
}

impl AddAssign for TickReport {
    fn add_assign(&mut self, rhs: Self) {
        self.applied += rhs.applied;
        self.idle += rhs.idle;
        self.skipped += rhs.skipped;
    }
}

/// A playable animation: keyframe tracks, the channels binding them to
/// nodes, and a looping clock.
#[derive(Debug, Clone)]
pub struct AnimationClip {
    name: String,
    tracks: Vec<TrackData>,
    channels: Vec<Channel>,
    track_cursors: Vec<KeyframeCursor>,
    /// Tracks whose playback failure has already been logged as a warning.
    warned_tracks: Vec<bool>,
    clock: PlaybackClock,
    settings: AnimationSettings,
}

impl AnimationClip {
    pub fn new<N: NodeTable>(
        name: impl Into<String>,
        tracks: Vec<TrackData>,
        channels: Vec<Channel>,
        nodes: &N,
    ) -> Result<Self> {
        Self::with_settings(name, tracks, channels, nodes, AnimationSettings::default())
    }

    /// Builds a clip and validates every channel against `nodes`.
    ///
    /// Channel errors (unknown track, dangling node, value kind that does not
    /// fit the property) fail construction. Malformed tracks are kept, logged
    /// once, and skipped on every tick. Degenerate segments are logged once
    /// and passed over during playback.
    pub fn with_settings<N: NodeTable>(
        name: impl Into<String>,
        tracks: Vec<TrackData>,
        channels: Vec<Channel>,
        nodes: &N,
        settings: AnimationSettings,
    ) -> Result<Self> {
        let name = name.into();

        let mut targets = FxHashSet::default();
        for (channel_idx, channel) in channels.iter().enumerate() {
            let track = tracks.get(channel.track_index).ok_or(
                CadenceError::TrackIndexOutOfBounds {
                    index: channel.track_index,
                    len: tracks.len(),
                },
            )?;

            if !nodes.contains_node(channel.node) {
                return Err(CadenceError::DanglingNode {
                    channel: channel_idx,
                    node: channel.node,
                });
            }

            if !track.fits(channel.target) {
                return Err(CadenceError::TargetMismatch {
                    channel: channel_idx,
                    track: channel.track_index,
                    target: channel.target.name(),
                    kind: track.kind(),
                });
            }

            if !targets.insert((channel.node, channel.target)) {
                log::debug!(
                    "Clip '{name}': channel {channel_idx} overrides {} of node {:?}",
                    channel.target.name(),
                    channel.node
                );
            }
        }

        let mut bounds = ClipBounds::EMPTY;
        let mut warned_tracks = vec![false; tracks.len()];
        for (track_idx, track) in tracks.iter().enumerate() {
            match track.validate() {
                Ok(()) => {
                    if let Some((start, end)) = track.time_range() {
                        bounds.include(start, end);
                    }
                    let degenerate = track.degenerate_segment_count(&settings);
                    if degenerate > 0 {
                        log::warn!(
                            "Clip '{name}': track {track_idx} has {degenerate} degenerate segment(s)"
                        );
                        warned_tracks[track_idx] = true;
                    }
                }
                Err(err) => {
                    log::warn!("Clip '{name}': track {track_idx} will be skipped: {err}");
                    warned_tracks[track_idx] = true;
                }
            }
        }

        let track_count = tracks.len();
        Ok(Self {
            name,
            tracks,
            channels,
            track_cursors: vec![KeyframeCursor::default(); track_count],
            warned_tracks,
            clock: PlaybackClock::new(bounds),
            settings,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn tracks(&self) -> &[TrackData] {
        &self.tracks
    }

    #[must_use]
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    #[must_use]
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    #[inline]
    #[must_use]
    pub fn current_time(&self) -> f32 {
        self.clock.time()
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> ClipBounds {
        self.clock.bounds()
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.clock.bounds().duration()
    }

    /// Advances the clock by `dt` seconds, restarting at 0 past the end.
    /// Returns `true` if the clock wrapped.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.clock.advance(dt)
    }

    /// Moves the clock to `time`. Times past the end restart at 0.
    pub fn seek(&mut self, time: f32) -> Result<()> {
        self.clock.seek(time).map(|_| ())
    }

    /// Advances the clock, then writes every channel at the new time.
    pub fn update<N: NodeTable>(&mut self, dt: f32, nodes: &mut N) -> TickReport {
        self.advance(dt);
        self.apply(nodes)
    }

    /// Evaluates every channel at the current time and writes the results
    /// into `nodes`, in channel order. Failures are isolated per channel.
    pub fn apply<N: NodeTable>(&mut self, nodes: &mut N) -> TickReport {
        let time = self.clock.time();
        let mut report = TickReport::default();

        for (channel_idx, channel) in self.channels.iter().enumerate() {
            let track = &self.tracks[channel.track_index];
            let cursor = &mut self.track_cursors[channel.track_index];

            match track.sample_with_cursor(time, cursor, &self.settings) {
                Ok(Some(value)) => {
                    let Some(transform) = nodes.transform_mut(channel.node) else {
                        log::warn!(
                            "Clip '{}': channel {channel_idx} targets removed node {:?}",
                            self.name,
                            channel.node
                        );
                        report.skipped += 1;
                        continue;
                    };
                    if value.write_to(transform, channel.target) {
                        report.applied += 1;
                    } else {
                        report.skipped += 1;
                    }
                }
                Ok(None) => report.idle += 1,
                Err(err) => {
                    // Each failing track warns once; repeats go to trace.
                    let warned = &mut self.warned_tracks[channel.track_index];
                    if *warned {
                        log::trace!("Clip '{}': channel {channel_idx} skipped: {err}", self.name);
                    } else {
                        log::warn!("Clip '{}': channel {channel_idx} skipped: {err}", self.name);
                        *warned = true;
                    }
                    report.skipped += 1;
                }
            }
        }

        report
    }

    /// Gets the value of the specified track at the current time.
    pub fn sample_track(&mut self, track_index: usize) -> Result<Option<TrackValue>> {
        let len = self.tracks.len();
        let track = self
            .tracks
            .get(track_index)
            .ok_or(CadenceError::TrackIndexOutOfBounds {
                index: track_index,
                len,
            })?;
        let cursor = &mut self.track_cursors[track_index];

        track.sample_with_cursor(self.clock.time(), cursor, &self.settings)
    }
}
