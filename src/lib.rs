//! # Cadence
//!
//! Keyframe animation sampling and playback for scene-graph transforms.
//!
//! ```rust,ignore
//! use cadence::prelude::*;
//!
//! let mut scene = Scene::new();
//! let cube = scene.create_node_with_name("cube");
//!
//! let track = TrackData::Vector3(KeyframeTrack::new(
//!     vec![0.0, 1.0],
//!     vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
//!     InterpolationMode::Linear,
//! ));
//! let channel = Channel::new(cube, TargetPath::Translation, 0);
//! let clip = AnimationClip::new("slide", vec![track], vec![channel], &scene)?;
//!
//! scene.add_animation(clip);
//! AnimationSystem::update(&mut scene, 0.5);
//! ```

pub use cadence_core::{errors, settings};
pub use cadence_core::{AnimationSettings, CadenceError, HermiteTangents, NodeHandle, Result};

pub use cadence_animation as animation;
pub use cadence_scene as scene;

pub use glam;

pub mod prelude {
    pub use cadence_animation::{
        AnimatedTransform, AnimationClip, Binder, Channel, ChannelTarget, ClipBounds,
        InterpolationMode, KeyframeTrack, NodeTable, TargetPath, TickReport, TrackData,
        TrackValue,
    };
    pub use cadence_core::{AnimationSettings, CadenceError, HermiteTangents, NodeHandle};
    pub use cadence_scene::{AnimationSystem, Node, Scene, Transform};
    pub use glam::{Quat, Vec3};
}
