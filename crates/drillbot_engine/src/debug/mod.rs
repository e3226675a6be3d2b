//! Debug module for visualization helpers

pub mod draw;

pub use draw::{DebugShape, COLLISION_COLOR};
