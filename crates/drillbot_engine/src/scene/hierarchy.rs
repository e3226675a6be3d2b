//! Arena-owned transform hierarchy
//!
//! All nodes live in one [`SlotMap`] owned by the [`Hierarchy`]. Parent links
//! are plain [`NodeKey`]s, so a node never owns its parent and tearing down
//! the hierarchy drops every node at once.
//!
//! A node may only be parented to a node inserted before it. Construction
//! order is therefore a valid parent-before-child order and cycles cannot be
//! expressed, which lets [`Hierarchy::resolve_all`] walk a flat list instead
//! of sorting the graph every frame.

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use crate::foundation::math::Mat4;

use super::TransformNode;

new_key_type! {
    /// Non-owning handle to a node in a [`Hierarchy`]
    pub struct NodeKey;
}

/// Hierarchy construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The key does not belong to this hierarchy
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeKey),

    /// A node cannot be its own parent
    #[error("Node {0:?} cannot be parented to itself")]
    SelfParent(NodeKey),

    /// The parent was inserted after the child
    #[error("Parent {parent:?} was inserted after child {child:?}")]
    ParentNotEarlier {
        /// Node being linked
        child: NodeKey,
        /// Requested parent
        parent: NodeKey,
    },
}

#[derive(Debug, Clone)]
struct Slot {
    node: TransformNode,
    order: usize,
}

/// Owner of a static set of transform nodes
#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    slots: SlotMap<NodeKey, Slot>,
    order: Vec<NodeKey>,
}

impl Hierarchy {
    /// Create an empty hierarchy
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node. Any parent set on `node` is discarded; link with
    /// [`set_parent`](Self::set_parent) or use [`insert_child`](Self::insert_child).
    pub fn insert(&mut self, mut node: TransformNode) -> NodeKey {
        node.parent = None;
        let order = self.order.len();
        let key = self.slots.insert(Slot { node, order });
        self.order.push(key);
        key
    }

    /// Insert a node already linked to `parent`
    pub fn insert_child(
        &mut self,
        parent: NodeKey,
        node: TransformNode,
    ) -> Result<NodeKey, SceneError> {
        if !self.slots.contains_key(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        let key = self.insert(node);
        self.slots[key].node.parent = Some(parent);
        Ok(key)
    }

    /// Link `child` under `parent`
    ///
    /// The parent must have been inserted before the child.
    pub fn set_parent(&mut self, child: NodeKey, parent: NodeKey) -> Result<(), SceneError> {
        if child == parent {
            return Err(SceneError::SelfParent(child));
        }
        let parent_order = self.slots.get(parent).ok_or(SceneError::UnknownNode(parent))?.order;
        let child_slot = self.slots.get_mut(child).ok_or(SceneError::UnknownNode(child))?;
        if parent_order >= child_slot.order {
            return Err(SceneError::ParentNotEarlier { child, parent });
        }
        child_slot.node.parent = Some(parent);
        Ok(())
    }

    /// Borrow a node
    pub fn node(&self, key: NodeKey) -> Option<&TransformNode> {
        self.slots.get(key).map(|slot| &slot.node)
    }

    /// Mutably borrow a node
    pub fn node_mut(&mut self, key: NodeKey) -> Option<&mut TransformNode> {
        self.slots.get_mut(key).map(|slot| &mut slot.node)
    }

    /// Resolved world matrix of a node
    pub fn world_matrix(&self, key: NodeKey) -> Option<&Mat4> {
        self.node(key).map(TransformNode::world_matrix)
    }

    /// Recompute one node's world matrix against its parent's cached world
    ///
    /// The parent must already be resolved this pass; otherwise the result
    /// reflects the parent's previous placement. Unknown keys are ignored.
    pub fn resolve(&mut self, key: NodeKey) {
        let Some(slot) = self.slots.get(key) else {
            return;
        };
        let parent_world = slot
            .node
            .parent
            .and_then(|parent| self.slots.get(parent))
            .map(|parent| parent.node.world);

        if let Some(slot) = self.slots.get_mut(key) {
            slot.node.resolve_with(parent_world.as_ref());
        }
    }

    /// Recompute every world matrix, parents before children
    pub fn resolve_all(&mut self) {
        for index in 0..self.order.len() {
            let key = self.order[index];
            self.resolve(key);
        }
    }

    /// Nodes in construction order
    pub fn iter_in_order(&self) -> impl Iterator<Item = (NodeKey, &TransformNode)> + '_ {
        self.order.iter().map(move |&key| (key, &self.slots[key].node))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the hierarchy has no nodes
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{constants::PI, Vec3};
    use approx::assert_relative_eq;

    fn worlds(hierarchy: &Hierarchy) -> Vec<Mat4> {
        hierarchy.iter_in_order().map(|(_, node)| *node.world_matrix()).collect()
    }

    /// root -> (arm -> hand, leg)
    fn sample() -> (Hierarchy, [NodeKey; 4]) {
        let mut hierarchy = Hierarchy::new();
        let root = hierarchy.insert(
            TransformNode::new()
                .with_translation(Vec3::new(1.0, 0.5, -2.0))
                .with_rotation(Vec3::new(0.0, 0.7, 0.0)),
        );
        let arm = hierarchy
            .insert_child(root, TransformNode::new().with_translation(Vec3::new(0.0, 0.37, -0.4)))
            .unwrap();
        let hand = hierarchy
            .insert_child(arm, TransformNode::new().with_translation(Vec3::new(0.0, 0.1, 0.8)))
            .unwrap();
        let leg = hierarchy
            .insert_child(
                root,
                TransformNode::new()
                    .with_translation(Vec3::new(-0.8, 0.37, 0.0))
                    .with_rotation(Vec3::new(0.0, 0.0, PI * 0.5))
                    .with_uniform_scale(2.0),
            )
            .unwrap();
        (hierarchy, [root, arm, hand, leg])
    }

    #[test]
    fn test_resolve_all_is_idempotent() {
        let (mut hierarchy, _) = sample();
        hierarchy.resolve_all();
        let first = worlds(&hierarchy);
        hierarchy.resolve_all();
        assert_eq!(first, worlds(&hierarchy));
    }

    #[test]
    fn test_leaf_mutation_leaves_others_untouched() {
        let (mut hierarchy, [root, arm, hand, leg]) = sample();
        hierarchy.resolve_all();
        let before = worlds(&hierarchy);

        hierarchy
            .node_mut(hand)
            .unwrap()
            .set_translation(Vec3::new(3.0, 3.0, 3.0));
        hierarchy.resolve_all();
        let after = worlds(&hierarchy);

        for (index, key) in [root, arm, hand, leg].into_iter().enumerate() {
            if key == hand {
                assert_ne!(before[index], after[index]);
            } else {
                assert_eq!(before[index], after[index]);
            }
        }
    }

    #[test]
    fn test_child_follows_parent_chain() {
        let (mut hierarchy, [root, arm, hand, _]) = sample();
        hierarchy.resolve_all();

        let expected = hierarchy.node(root).unwrap().local_matrix()
            * hierarchy.node(arm).unwrap().local_matrix()
            * hierarchy.node(hand).unwrap().local_matrix();
        assert_relative_eq!(*hierarchy.world_matrix(hand).unwrap(), expected, epsilon = 1e-6);
    }

    #[test]
    fn test_stale_parent_until_resolved() {
        let (mut hierarchy, [root, arm, _, _]) = sample();
        hierarchy.resolve_all();
        let arm_before = *hierarchy.world_matrix(arm).unwrap();

        hierarchy
            .node_mut(root)
            .unwrap()
            .set_translation(Vec3::new(9.0, 0.0, 9.0));
        // Child resolved before its parent still sees the old parent world
        hierarchy.resolve(arm);
        assert_eq!(*hierarchy.world_matrix(arm).unwrap(), arm_before);

        hierarchy.resolve(root);
        hierarchy.resolve(arm);
        assert_ne!(*hierarchy.world_matrix(arm).unwrap(), arm_before);
    }

    #[test]
    fn test_set_parent_requires_earlier_parent() {
        let mut hierarchy = Hierarchy::new();
        let first = hierarchy.insert(TransformNode::new());
        let second = hierarchy.insert(TransformNode::new());

        assert_eq!(
            hierarchy.set_parent(first, second),
            Err(SceneError::ParentNotEarlier { child: first, parent: second })
        );
        assert_eq!(hierarchy.set_parent(first, first), Err(SceneError::SelfParent(first)));
        assert_eq!(hierarchy.set_parent(second, first), Ok(()));
        assert_eq!(hierarchy.node(second).unwrap().parent(), Some(first));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        // Third slot of another arena does not exist in a one-node arena
        let mut other = Hierarchy::new();
        let _ = other.insert(TransformNode::new());
        let _ = other.insert(TransformNode::new());
        let stale = other.insert(TransformNode::new());

        let mut hierarchy = Hierarchy::new();
        let only = hierarchy.insert(TransformNode::new());
        assert_eq!(
            hierarchy.insert_child(stale, TransformNode::new()),
            Err(SceneError::UnknownNode(stale))
        );
        assert!(hierarchy.set_parent(only, stale).is_err());
        assert_eq!(hierarchy.len(), 1);
    }

    #[test]
    fn test_insert_discards_preset_parent() {
        let mut hierarchy = Hierarchy::new();
        let root = hierarchy.insert(TransformNode::new());
        let child = hierarchy.insert_child(root, TransformNode::new()).unwrap();

        let copy = hierarchy.node(child).unwrap().clone();
        let detached = hierarchy.insert(copy);
        assert!(hierarchy.node(detached).unwrap().parent().is_none());
    }
}
