//! Keyframe animation for scene-node transforms.
//!
//! - [`KeyframeTrack`]: time stamps and values, evaluated with step, linear
//!   or cubic Hermite interpolation
//! - [`Channel`]: binds one track to the translation, rotation or scale of one node
//! - [`AnimationClip`]: owns tracks and channels, plays them on a looping clock

pub mod binder;
pub mod binding;
pub mod clip;
pub mod clock;
pub mod target;
pub mod tracks;
pub mod values;

pub use binder::{Binder, ChannelTarget};
pub use binding::{Channel, TargetPath};
pub use clip::{AnimationClip, TickReport, TrackData, TrackValue};
pub use clock::{ClipBounds, PlaybackClock};
pub use target::{AnimatedTransform, NodeTable};
pub use tracks::{InterpolationMode, KeyframeCursor, KeyframeTrack};
pub use values::{HermiteBasis, Interpolatable};
