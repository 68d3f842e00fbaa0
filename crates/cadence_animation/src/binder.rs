use cadence_core::{CadenceError, Result};

use crate::binding::{Channel, TargetPath};
use crate::target::NodeTable;

/// A channel described by node name, as produced by asset loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelTarget {
    pub node_name: String,
    pub target: TargetPath,
    pub track_index: usize,
}

pub struct Binder;

impl Binder {
    /// Resolves every target to a node handle. Fails on the first name the
    /// table cannot resolve.
    pub fn bind<N: NodeTable>(nodes: &N, targets: &[ChannelTarget]) -> Result<Vec<Channel>> {
        targets
            .iter()
            .map(|t| {
                let node = nodes
                    .find_node(&t.node_name)
                    .ok_or_else(|| CadenceError::NodeNotFound(t.node_name.clone()))?;
                log::debug!(
                    "Bound track {} to {} of '{}' ({node:?})",
                    t.track_index,
                    t.target.name(),
                    t.node_name
                );
                Ok(Channel::new(node, t.target, t.track_index))
            })
            .collect()
    }
}
