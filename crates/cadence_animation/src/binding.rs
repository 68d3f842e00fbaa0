use cadence_core::NodeHandle;

/// Defines the target property for animation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // Maps to transform.position
    Rotation,    // Maps to transform.rotation
    Scale,       // Maps to transform.scale
}

impl TargetPath {
    /// Number of floats per keyframe value in a raw output buffer.
    #[inline]
    #[must_use]
    pub const fn stride(self) -> usize {
        match self {
            TargetPath::Translation | TargetPath::Scale => 3,
            TargetPath::Rotation => 4,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TargetPath::Translation => "translation",
            TargetPath::Rotation => "rotation",
            TargetPath::Scale => "scale",
        }
    }
}

/// Binds track `track_index` of a clip to the `target` property of `node`.
///
/// The node is referenced by handle only; the node table owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    pub node: NodeHandle,
    pub target: TargetPath,
    pub track_index: usize,
}

impl Channel {
    #[must_use]
    pub fn new(node: NodeHandle, target: TargetPath, track_index: usize) -> Self {
        Self {
            node,
            target,
            track_index,
        }
    }
}
