//! Physics module for collision volumes
//!
//! Only the placement of collision volumes lives here: each volume follows a
//! node in the transform hierarchy. Overlap queries against other objects
//! are left to the game.

pub mod collision;

pub use collision::{BoundingSphere, CollisionNode};
