//! Debug drawing primitives
//!
//! Shapes submitted alongside regular draws for visualization only. They
//! carry no mesh and are expected to be drawn as overlays.

use crate::foundation::math::{Vec3, Vec4};

/// Default color for collision volumes (translucent green)
pub const COLLISION_COLOR: Vec4 = Vec4::new(0.2, 1.0, 0.2, 0.6);

/// Debug shape primitives that can be rendered for visualization
#[derive(Clone, Debug, PartialEq)]
pub enum DebugShape {
    /// Sphere at center with radius
    Sphere {
        /// World-space center
        center: Vec3,
        /// World-space radius
        radius: f32,
        /// RGBA color
        color: Vec4,
        /// Draw edges only
        wireframe: bool,
    },
}

impl DebugShape {
    /// Wireframe sphere in the given color
    pub fn wire_sphere(center: Vec3, radius: f32, color: Vec4) -> Self {
        Self::Sphere { center, radius, color, wireframe: true }
    }

    /// Center of the shape
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Sphere { center, .. } => *center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_sphere() {
        let shape = DebugShape::wire_sphere(Vec3::new(1.0, 2.0, 3.0), 1.5, COLLISION_COLOR);
        assert_eq!(shape.center(), Vec3::new(1.0, 2.0, 3.0));
        assert!(matches!(
            shape,
            DebugShape::Sphere { radius, wireframe: true, .. } if radius == 1.5
        ));
    }
}
