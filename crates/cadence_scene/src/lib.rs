//! Minimal scene graph for the Cadence engine.
//!
//! - [`Node`]: hierarchy links and a [`Transform`]
//! - [`Scene`]: node arena addressed by [`NodeHandle`](cadence_core::NodeHandle), plus owned clips
//! - [`AnimationSystem`]: ticks every clip owned by a scene

pub mod node;
pub mod scene;
pub mod system;
pub mod transform;

pub use node::Node;
pub use scene::Scene;
pub use system::AnimationSystem;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct AnimationKey;
}
