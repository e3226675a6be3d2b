//! Scene hierarchy
//!
//! Transform nodes owned by an arena and resolved parent-before-child.
//!
//! ## Architecture
//!
//! ```text
//! Gameplay (mutates local TRS)
//!      ↓
//! Hierarchy::resolve_all (world = parent_world * local)
//!      ↓
//! Render dispatch (reads world matrices only)
//! ```

mod hierarchy;
mod node;

pub use hierarchy::{Hierarchy, NodeKey, SceneError};
pub use node::{TransformNode, VisualHandle};
