use crate::animation::action::TrackValue;

/// Defines the target property for animation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Translation, // Maps to transform.position
    Rotation,    // Maps to transform.rotation
    Scale,       // Maps to transform.scale
    Weight,      // Scalar channel (visibility, morph weight, ...)
}

/// The host scene graph, seen from the animation system.
///
/// Sampled values are pushed by node name; resolving the name to an actual
/// node (and ignoring unknown names) is the host's business.
pub trait PoseTarget {
    fn apply(&mut self, node_name: &str, target: TargetPath, value: TrackValue);
}

/// Discards every sample. Useful when playback state matters but no scene is attached.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPoseTarget;

impl PoseTarget for NullPoseTarget {
    fn apply(&mut self, _node_name: &str, _target: TargetPath, _value: TrackValue) {}
}
