//! Transform node: local TRS plus a cached world matrix

use crate::foundation::math::{Mat4, Mat4Ext, Point3, Vec3};
use crate::render::{BlendMode, RenderCommand, RenderSink};

use super::NodeKey;

/// Identifier of the visual (mesh) bound to a node
///
/// Loading the asset behind the path is the renderer's job; the scene only
/// carries the association.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VisualHandle(String);

impl VisualHandle {
    /// Create a handle from an asset path
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Asset path this handle refers to
    pub fn path(&self) -> &str {
        &self.0
    }
}

/// A node in a transform hierarchy
///
/// Holds its placement relative to the parent frame (or the world frame when
/// it has no parent). The world matrix is derived state, refreshed by
/// [`Hierarchy::resolve`](super::Hierarchy::resolve).
#[derive(Debug, Clone, PartialEq)]
pub struct TransformNode {
    translation: Vec3,
    /// Euler angles in radians (pitch, yaw, roll) as (x, y, z)
    rotation: Vec3,
    scale: Vec3,
    pub(super) parent: Option<NodeKey>,
    pub(super) world: Mat4,
    visual: Option<VisualHandle>,
}

impl Default for TransformNode {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            parent: None,
            world: Mat4::identity(),
            visual: None,
        }
    }
}

impl TransformNode {
    /// Create a node at the origin with unit scale
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Set translation
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Builder pattern: Set rotation from Euler angles (radians)
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder pattern: Set scale (non-uniform)
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Builder pattern: Set scale (uniform)
    pub fn with_uniform_scale(self, scale: f32) -> Self {
        self.with_scale(Vec3::new(scale, scale, scale))
    }

    /// Builder pattern: Bind a visual asset
    pub fn with_visual(mut self, path: impl Into<String>) -> Self {
        self.load_visual(path);
        self
    }

    /// Local translation
    pub fn translation(&self) -> Vec3 {
        self.translation
    }

    /// Set local translation
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    /// Local rotation as Euler angles in radians
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Set local rotation as Euler angles in radians
    pub fn set_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }

    /// Local scale
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Set local scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    /// Parent key, if any. Links are managed through the owning hierarchy.
    pub fn parent(&self) -> Option<NodeKey> {
        self.parent
    }

    /// Associate a renderable asset with this node
    pub fn load_visual(&mut self, path: impl Into<String>) {
        self.visual = Some(VisualHandle::new(path));
    }

    /// Bound visual, if any
    pub fn visual(&self) -> Option<&VisualHandle> {
        self.visual.as_ref()
    }

    /// Local transform as `T * R * S`
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_trs(&self.translation, &self.rotation, &self.scale)
    }

    /// World matrix from the most recent resolve
    pub fn world_matrix(&self) -> &Mat4 {
        &self.world
    }

    /// World-space origin of this node
    pub fn world_position(&self) -> Vec3 {
        self.world.transform_point(&Point3::origin()).coords
    }

    /// Recompute the cached world matrix from an already-resolved parent world
    pub(super) fn resolve_with(&mut self, parent_world: Option<&Mat4>) {
        let local = self.local_matrix();
        self.world = match parent_world {
            Some(parent) => parent * local,
            None => local,
        };
    }

    /// Submit an opaque draw of the bound visual at the resolved world transform
    pub fn render(&self, sink: &mut dyn RenderSink) {
        self.submit(sink, BlendMode::Opaque);
    }

    /// Submit a subtractive (darkening) draw, used for blob shadows
    pub fn render_subtractive(&self, sink: &mut dyn RenderSink) {
        self.submit(sink, BlendMode::Subtractive);
    }

    fn submit(&self, sink: &mut dyn RenderSink, blend: BlendMode) {
        if let Some(visual) = &self.visual {
            sink.submit(RenderCommand::new(self.world, visual.clone(), blend));
        } else {
            log::trace!("Skipping draw of node without a visual");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;
    use crate::render::DrawList;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_node_is_identity() {
        let node = TransformNode::new();
        assert_eq!(node.scale(), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(node.local_matrix(), Mat4::identity());
        assert_eq!(*node.world_matrix(), Mat4::identity());
        assert!(node.parent().is_none());
    }

    #[test]
    fn test_resolve_without_parent_uses_local() {
        let mut node = TransformNode::new()
            .with_translation(Vec3::new(1.0, 2.0, 3.0))
            .with_rotation(Vec3::new(0.0, PI, 0.0));
        node.resolve_with(None);
        assert_relative_eq!(node.world_position(), Vec3::new(1.0, 2.0, 3.0), epsilon = 1e-6);
    }

    #[test]
    fn test_resolve_composes_parent_world() {
        let parent_world = Mat4::from_trs(
            &Vec3::new(5.0, 0.0, 0.0),
            &Vec3::new(0.0, PI * 0.5, 0.0),
            &Vec3::new(2.0, 2.0, 2.0),
        );
        let mut child = TransformNode::new().with_translation(Vec3::new(0.0, 0.0, -1.0));
        child.resolve_with(Some(&parent_world));

        // (0,0,-1) scaled to (0,0,-2), yawed 90° to (-2,0,0), then shifted by 5
        assert_relative_eq!(child.world_position(), Vec3::new(3.0, 0.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_render_requires_visual() {
        let mut list = DrawList::new();
        TransformNode::new().render(&mut list);
        assert!(list.commands().is_empty());

        let node = TransformNode::new().with_visual("Resources/body.cmo");
        node.render(&mut list);
        node.render_subtractive(&mut list);
        assert_eq!(list.commands().len(), 2);
        assert_eq!(list.commands()[0].blend, BlendMode::Opaque);
        assert_eq!(list.commands()[1].blend, BlendMode::Subtractive);
        assert_eq!(list.commands()[1].visual.path(), "Resources/body.cmo");
    }
}
