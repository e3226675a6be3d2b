//! Collision volumes attached to the transform hierarchy
//!
//! # Module Organization
//!
//! - [`primitives`] - Basic geometric primitives (spheres)
//! - [`node`] - Hierarchy-attached collision volumes

pub mod primitives;
pub mod node;

pub use primitives::BoundingSphere;
pub use node::CollisionNode;
