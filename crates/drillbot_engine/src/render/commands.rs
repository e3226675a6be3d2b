//! Rendering command pattern
//!
//! Scene code emits commands into a [`RenderSink`]; the renderer behind the
//! sink owns meshes, pipelines and draw-call submission.
//!
//! # Design Philosophy
//!
//! The renderer should be a passive library that:
//! - Accepts pre-computed world matrices (no transform logic)
//! - Accepts visual handles (no entity management)
//! - Only handles drawing (no lifecycle, AI, or timing)

use crate::debug::DebugShape;
use crate::foundation::math::Mat4;
use crate::scene::VisualHandle;

/// How a draw combines with what is already in the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Regular depth-tested opaque draw
    Opaque,
    /// Subtracts the source color, darkening the destination
    Subtractive,
}

/// A command to render one visual
///
/// # Example
///
/// ```rust
/// use drillbot_engine::foundation::math::Mat4;
/// use drillbot_engine::render::{BlendMode, DrawList, RenderCommand, RenderSink};
/// use drillbot_engine::scene::VisualHandle;
///
/// let mut list = DrawList::new();
/// let shadow = VisualHandle::new("shadow.cmo");
/// list.submit(RenderCommand::new(Mat4::identity(), shadow, BlendMode::Subtractive));
/// assert_eq!(list.count_with(BlendMode::Subtractive), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCommand {
    /// Pre-computed model-to-world transformation matrix
    pub transform: Mat4,

    /// Visual to draw
    pub visual: VisualHandle,

    /// Blend mode for this draw
    pub blend: BlendMode,
}

impl RenderCommand {
    /// Create a new render command
    pub fn new(transform: Mat4, visual: VisualHandle, blend: BlendMode) -> Self {
        Self { transform, visual, blend }
    }
}

/// Receiver of draw requests
pub trait RenderSink {
    /// Queue a mesh draw
    fn submit(&mut self, command: RenderCommand);

    /// Queue a debug overlay shape
    fn submit_debug(&mut self, shape: DebugShape);
}

/// Recording sink holding one frame's worth of commands
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    commands: Vec<RenderCommand>,
    debug_shapes: Vec<DebugShape>,
}

impl DrawList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded mesh draws in submission order
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Recorded debug shapes in submission order
    pub fn debug_shapes(&self) -> &[DebugShape] {
        &self.debug_shapes
    }

    /// Number of mesh draws using `blend`
    pub fn count_with(&self, blend: BlendMode) -> usize {
        self.commands.iter().filter(|command| command.blend == blend).count()
    }

    /// Check if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.debug_shapes.is_empty()
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.commands.clear();
        self.debug_shapes.clear();
    }
}

impl RenderSink for DrawList {
    fn submit(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    fn submit_debug(&mut self, shape: DebugShape) {
        self.debug_shapes.push(shape);
    }
}
