//! The only view of the scene the animation core needs: a table of nodes,
//! addressed by [`NodeHandle`], each exposing a writable transform.

use cadence_core::NodeHandle;
use glam::{Quat, Vec3};
use slotmap::SlotMap;

/// A transform that animation channels can write into.
pub trait AnimatedTransform {
    fn set_translation(&mut self, translation: Vec3);
    fn set_rotation(&mut self, rotation: Quat);
    fn set_scale(&mut self, scale: Vec3);
}

/// Externally owned storage of animatable nodes.
pub trait NodeTable {
    type Transform: AnimatedTransform;

    fn contains_node(&self, node: NodeHandle) -> bool;

    fn transform_mut(&mut self, node: NodeHandle) -> Option<&mut Self::Transform>;

    /// Resolves a node by name. Tables without names never resolve.
    fn find_node(&self, name: &str) -> Option<NodeHandle> {
        let _ = name;
        None
    }
}

impl<T: AnimatedTransform> NodeTable for SlotMap<NodeHandle, T> {
    type Transform = T;

    #[inline]
    fn contains_node(&self, node: NodeHandle) -> bool {
        self.contains_key(node)
    }

    #[inline]
    fn transform_mut(&mut self, node: NodeHandle) -> Option<&mut T> {
        self.get_mut(node)
    }
}
