//! # Rendering Front End
//!
//! Everything the scene needs to describe a frame without touching a GPU:
//!
//! - **Camera**: perspective camera with cached view and projection matrices
//! - **Commands**: draw requests with blend modes, debug shapes and the
//!   [`RenderSink`] seam behind which a real renderer lives

pub mod camera;
pub mod commands;

pub use camera::Camera;
pub use commands::{BlendMode, DrawList, RenderCommand, RenderSink};
