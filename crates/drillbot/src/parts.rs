//! Body parts of the drill enemy and how each sits on its parent

use drillbot_engine::foundation::math::{constants::{HALF_PI, PI}, Vec3};
use drillbot_engine::scene::TransformNode;

/// Number of body parts
pub const PART_COUNT: usize = 5;

/// Mesh used for the blob shadow
pub const SHADOW_VISUAL: &str = "Resources/shadow.cmo";

/// Role of a body part; the discriminant is its index in construction order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartRole {
    /// Root of the hierarchy, driven by the AI
    Body = 0,
    /// Sits on top of the body, turned to face backwards
    Cockpit = 1,
    /// Missile launcher on the body's back
    Launcher = 2,
    /// Side shield, rolled upright and doubled in size
    Shield = 3,
    /// Drill mounted on the cockpit
    Drill = 4,
}

impl PartRole {
    /// All roles in construction order; every parent precedes its children
    pub const ALL: [PartRole; PART_COUNT] = [
        PartRole::Body,
        PartRole::Cockpit,
        PartRole::Launcher,
        PartRole::Shield,
        PartRole::Drill,
    ];

    /// Index into per-part arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parent part, `None` for the root
    pub const fn parent(self) -> Option<PartRole> {
        match self {
            PartRole::Body => None,
            PartRole::Cockpit | PartRole::Launcher | PartRole::Shield => Some(PartRole::Body),
            PartRole::Drill => Some(PartRole::Cockpit),
        }
    }

    /// Mesh path for this part
    pub const fn visual(self) -> &'static str {
        match self {
            PartRole::Body => "Resources/body.cmo",
            PartRole::Cockpit => "Resources/cockpit.cmo",
            PartRole::Launcher => "Resources/launcher.cmo",
            PartRole::Shield => "Resources/shield.cmo",
            PartRole::Drill => "Resources/drill.cmo",
        }
    }

    /// Node for this part with its fixed offset from the parent frame
    ///
    /// The body's placement is randomized at spawn, so it starts at the origin.
    pub fn build_node(self) -> TransformNode {
        let node = TransformNode::new().with_visual(self.visual());
        match self {
            PartRole::Body => node,
            PartRole::Cockpit => node
                .with_translation(Vec3::new(0.0, 0.37, -0.4))
                .with_rotation(Vec3::new(0.0, PI, 0.0)),
            PartRole::Launcher => node.with_translation(Vec3::new(0.0, 0.37, 0.4)),
            PartRole::Shield => node
                .with_translation(Vec3::new(-0.8, 0.37, 0.0))
                .with_rotation(Vec3::new(0.0, 0.0, HALF_PI))
                .with_uniform_scale(2.0),
            PartRole::Drill => node.with_translation(Vec3::new(0.0, 0.1, 0.8)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parents_precede_children() {
        for role in PartRole::ALL {
            if let Some(parent) = role.parent() {
                assert!(parent.index() < role.index(), "{parent:?} must come before {role:?}");
            }
        }
    }

    #[test]
    fn test_indices_match_construction_order() {
        for (index, role) in PartRole::ALL.into_iter().enumerate() {
            assert_eq!(role.index(), index);
        }
    }

    #[test]
    fn test_shield_layout() {
        let shield = PartRole::Shield.build_node();
        assert_eq!(shield.scale(), Vec3::new(2.0, 2.0, 2.0));
        assert_eq!(shield.rotation(), Vec3::new(0.0, 0.0, HALF_PI));
        assert_eq!(shield.visual().map(|v| v.path()), Some("Resources/shield.cmo"));
    }
}
