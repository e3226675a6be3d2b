//! Collision volume that rides on a hierarchy node

use crate::debug::{DebugShape, COLLISION_COLOR};
use crate::foundation::math::{Mat4, Vec3};
use crate::render::RenderSink;
use crate::scene::{Hierarchy, NodeKey, SceneError, TransformNode};

use super::BoundingSphere;

/// Sphere collision volume attached to a node of a [`Hierarchy`]
///
/// The volume owns a dedicated hierarchy node holding its local offset. Its
/// world sphere is refreshed by [`update`](Self::update) and read by the
/// overlap checks of the game.
#[derive(Debug, Clone)]
pub struct CollisionNode {
    node: NodeKey,
    local_radius: f32,
    world: BoundingSphere,
}

impl CollisionNode {
    /// Insert a collision node under `parent` at `offset` with `radius`
    pub fn attach(
        hierarchy: &mut Hierarchy,
        parent: NodeKey,
        offset: Vec3,
        radius: f32,
    ) -> Result<Self, SceneError> {
        let node = hierarchy.insert_child(parent, TransformNode::new().with_translation(offset))?;
        Ok(Self {
            node,
            local_radius: radius,
            world: BoundingSphere::new(offset, radius),
        })
    }

    /// Hierarchy node carrying the local offset
    pub fn node(&self) -> NodeKey {
        self.node
    }

    /// Radius before world scaling
    pub fn local_radius(&self) -> f32 {
        self.local_radius
    }

    /// Change the radius before world scaling
    pub fn set_local_radius(&mut self, radius: f32) {
        self.local_radius = radius;
    }

    /// World-space sphere from the last [`update`](Self::update)
    pub fn world_sphere(&self) -> &BoundingSphere {
        &self.world
    }

    /// Re-resolve the node against its parent and refresh the world sphere
    ///
    /// The parent must already be resolved for this frame.
    pub fn update(&mut self, hierarchy: &mut Hierarchy) {
        hierarchy.resolve(self.node);
        if let Some(world) = hierarchy.world_matrix(self.node) {
            self.world = BoundingSphere::new(
                Vec3::new(world[(0, 3)], world[(1, 3)], world[(2, 3)]),
                self.local_radius * max_axis_scale(world),
            );
        }
    }

    /// Debug overlay for the current world sphere
    pub fn debug_shape(&self) -> DebugShape {
        DebugShape::wire_sphere(self.world.center, self.world.radius, COLLISION_COLOR)
    }

    /// Submit the debug overlay
    pub fn render(&self, sink: &mut dyn RenderSink) {
        sink.submit_debug(self.debug_shape());
    }
}

/// Largest scale factor among the world axes of `m`
fn max_axis_scale(m: &Mat4) -> f32 {
    (0..3)
        .map(|axis| m.fixed_view::<3, 1>(0, axis).magnitude())
        .fold(0.0, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::HALF_PI;
    use crate::render::DrawList;
    use approx::assert_relative_eq;

    #[test]
    fn test_update_follows_parent() {
        let mut hierarchy = Hierarchy::new();
        let body = hierarchy.insert(
            TransformNode::new()
                .with_translation(Vec3::new(4.0, 0.5, -3.0))
                .with_rotation(Vec3::new(0.0, HALF_PI, 0.0)),
        );
        let mut collision =
            CollisionNode::attach(&mut hierarchy, body, Vec3::new(0.0, 0.3, 0.0), 1.0).unwrap();

        hierarchy.resolve_all();
        collision.update(&mut hierarchy);
        assert_relative_eq!(
            collision.world_sphere().center,
            Vec3::new(4.0, 0.8, -3.0),
            epsilon = 1e-5
        );
        assert_relative_eq!(collision.world_sphere().radius, 1.0, epsilon = 1e-6);

        hierarchy.node_mut(body).unwrap().set_translation(Vec3::new(0.0, 0.5, 0.0));
        hierarchy.resolve(body);
        collision.update(&mut hierarchy);
        assert_relative_eq!(
            collision.world_sphere().center,
            Vec3::new(0.0, 0.8, 0.0),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_radius_scales_with_parent() {
        let mut hierarchy = Hierarchy::new();
        let body = hierarchy.insert(TransformNode::new().with_scale(Vec3::new(1.0, 3.0, 2.0)));
        let mut collision =
            CollisionNode::attach(&mut hierarchy, body, Vec3::zeros(), 0.5).unwrap();

        hierarchy.resolve_all();
        collision.update(&mut hierarchy);
        assert_relative_eq!(collision.world_sphere().radius, 1.5, epsilon = 1e-6);
    }

    #[test]
    fn test_render_emits_debug_sphere() {
        let mut hierarchy = Hierarchy::new();
        let body = hierarchy.insert(TransformNode::new());
        let mut collision =
            CollisionNode::attach(&mut hierarchy, body, Vec3::zeros(), 1.0).unwrap();
        collision.set_local_radius(2.0);
        collision.update(&mut hierarchy);

        let mut list = DrawList::new();
        collision.render(&mut list);
        assert!(list.commands().is_empty());
        assert_eq!(
            list.debug_shapes(),
            &[DebugShape::wire_sphere(Vec3::zeros(), 2.0, COLLISION_COLOR)]
        );
    }
}
