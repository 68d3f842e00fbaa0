use cadence_animation::{AnimationClip, NodeTable};
use cadence_core::NodeHandle;
use slotmap::{SecondaryMap, SlotMap};

use crate::AnimationKey;
use crate::node::Node;
use crate::transform::Transform;

/// Owns the node arena and the clips that animate it.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: SlotMap<NodeHandle, Node>,
    names: SecondaryMap<NodeHandle, String>,
    pub root_nodes: Vec<NodeHandle>,

    pub(crate) animations: SlotMap<AnimationKey, AnimationClip>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    pub fn create_node(&mut self) -> NodeHandle {
        self.add_node(Node::new())
    }

    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        let handle = self.create_node();
        self.names.insert(handle, name.to_string());
        handle
    }

    /// Adds a node at the root of the hierarchy.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.add_node(child);
        self.attach(handle, parent);
        handle
    }

    /// Moves `child` under `parent`, detaching it from its previous parent.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        if !self.nodes.contains_key(child) || !self.nodes.contains_key(parent) {
            log::error!("Attach failed: unknown node {child:?} or parent {parent:?}");
            return;
        }

        self.detach(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Unlinks `node` from its parent (or the root list) without removing it.
    fn detach(&mut self, node: NodeHandle) {
        let old_parent = self.nodes.get(node).and_then(Node::parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p)
                && let Some(i) = n.children.iter().position(|&x| x == node)
            {
                n.children.remove(i);
            }
        } else if let Some(i) = self.root_nodes.iter().position(|&x| x == node) {
            self.root_nodes.remove(i);
        }
    }

    /// Removes a node and its whole subtree.
    ///
    /// Clips bound to removed nodes keep their handles; they skip those
    /// channels from then on.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let Some(children) = self.nodes.get(handle).map(|n| n.children.clone()) else {
            return;
        };
        for child in children {
            self.remove_node(child);
        }

        self.detach(handle);
        self.names.remove(handle);
        self.nodes.remove(handle);
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.names.get(handle).map(String::as_str)
    }

    pub fn set_name(&mut self, handle: NodeHandle, name: &str) {
        if self.nodes.contains_key(handle) {
            self.names.insert(handle, name.to_string());
        }
    }

    /// Depth-first search from the root nodes, in insertion order.
    #[must_use]
    pub fn find_node_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.root_nodes
            .iter()
            .find_map(|&root| self.find_in_subtree(root, name))
    }

    fn find_in_subtree(&self, current: NodeHandle, name: &str) -> Option<NodeHandle> {
        let node = self.nodes.get(current)?;
        if self.get_name(current) == Some(name) {
            return Some(current);
        }
        node.children
            .iter()
            .find_map(|&child| self.find_in_subtree(child, name))
    }

    /// Rebuilds the local matrix of every node whose transform changed.
    /// Returns the number of rebuilt matrices.
    pub fn update_local_matrices(&mut self) -> usize {
        self.nodes
            .values_mut()
            .map(|node| node.transform.update_local_matrix())
            .filter(|&changed| changed)
            .count()
    }

    // ========================================================================
    // Animations
    // ========================================================================

    pub fn add_animation(&mut self, clip: AnimationClip) -> AnimationKey {
        self.animations.insert(clip)
    }

    pub fn remove_animation(&mut self, key: AnimationKey) -> Option<AnimationClip> {
        self.animations.remove(key)
    }

    #[must_use]
    pub fn animation(&self, key: AnimationKey) -> Option<&AnimationClip> {
        self.animations.get(key)
    }

    pub fn animation_mut(&mut self, key: AnimationKey) -> Option<&mut AnimationClip> {
        self.animations.get_mut(key)
    }
}

impl NodeTable for Scene {
    type Transform = Transform;

    #[inline]
    fn contains_node(&self, node: NodeHandle) -> bool {
        self.nodes.contains_key(node)
    }

    #[inline]
    fn transform_mut(&mut self, node: NodeHandle) -> Option<&mut Transform> {
        self.nodes.get_mut(node).map(|n| &mut n.transform)
    }

    fn find_node(&self, name: &str) -> Option<NodeHandle> {
        self.find_node_by_name(name)
    }
}
