//! # Drillbot Engine
//!
//! Scene-side building blocks for frame-driven 3D games.
//!
//! ## Features
//!
//! - **Transform Hierarchy**: arena-owned nodes resolved parent-before-child
//! - **Camera**: cached look-at view and perspective projection
//! - **Collision Volumes**: spheres that follow hierarchy nodes
//! - **Render Dispatch**: blend-aware draw commands behind a sink trait
//! - **Configuration**: TOML/RON settings with validation
//!
//! ## Quick Start
//!
//! ```rust
//! use drillbot_engine::prelude::*;
//!
//! let mut hierarchy = Hierarchy::new();
//! let body = hierarchy.insert(TransformNode::new().with_visual("body.cmo"));
//! let arm = hierarchy
//!     .insert_child(body, TransformNode::new().with_translation(Vec3::new(0.0, 0.37, 0.4)))
//!     .unwrap();
//!
//! hierarchy.node_mut(body).unwrap().set_translation(Vec3::new(1.0, 0.5, 0.0));
//! hierarchy.resolve_all();
//! let arm_position = hierarchy.node(arm).unwrap().world_position();
//! assert!((arm_position - Vec3::new(1.0, 0.87, 0.4)).magnitude() < 1e-5);
//!
//! let mut camera = Camera::default();
//! camera.update();
//!
//! let mut frame = DrawList::new();
//! hierarchy.node(body).unwrap().render(&mut frame);
//! assert_eq!(frame.commands().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod scene;
pub mod physics;
pub mod render;
pub mod debug;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, ConfigFormat},
        debug::DebugShape,
        foundation::{
            math::{utils::shortest_angle_delta, Mat4, Mat4Ext, Vec3},
            random::{RandomSource, RngSource, ScriptedRandom},
        },
        physics::{BoundingSphere, CollisionNode},
        render::{BlendMode, Camera, DrawList, RenderCommand, RenderSink},
        scene::{Hierarchy, NodeKey, SceneError, TransformNode, VisualHandle},
    };
}
