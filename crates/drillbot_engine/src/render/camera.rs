//! # 3D Camera
//!
//! Perspective camera that caches its view and projection matrices.
//!
//! ## Design Principles
//! - **Explicit refresh**: matrices change only in [`Camera::update`]
//! - **No hidden state**: cached matrices are pure functions of the public parameters
//! - **Renderer-agnostic**: right-handed Y-up view space, depth mapped to `[0, 1]`

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// 3D perspective camera
///
/// # Coordinate System
/// Right-handed, Y-up. The camera looks down its local -Z axis.
///
/// # Update Contract
/// Parameters are plain fields. After mutating any of them call
/// [`update`](Self::update) once before reading the matrices; until then the
/// matrices describe the previous parameters. Degenerate setups (eye equal to
/// target, or up parallel to the view direction) yield a meaningless view
/// matrix and are the caller's responsibility to avoid.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub eye: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Vertical field of view in radians
    pub fov_y: f32,

    /// Aspect ratio (width / height)
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,

    view: Mat4,
    projection: Mat4,
}

impl Camera {
    /// Create a perspective camera
    ///
    /// # Arguments
    /// * `eye` - Camera position in world space
    /// * `target` - Point to look at
    /// * `fov_degrees` - Vertical field of view in degrees (stored in radians)
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    ///
    /// # Example
    /// ```rust
    /// use drillbot_engine::foundation::math::Vec3;
    /// use drillbot_engine::render::Camera;
    ///
    /// let mut camera = Camera::perspective(
    ///     Vec3::new(0.0, 6.0, 10.0),
    ///     Vec3::new(0.0, 2.0, 0.0),
    ///     60.0,
    ///     640.0 / 480.0,
    ///     0.1,
    ///     1000.0,
    /// );
    /// camera.update();
    /// ```
    pub fn perspective(
        eye: Vec3,
        target: Vec3,
        fov_degrees: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        Self {
            eye,
            target,
            up: Vec3::y(),
            fov_y: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
            view: Mat4::identity(),
            projection: Mat4::identity(),
        }
    }

    /// Recompute view and projection from the current parameters
    pub fn update(&mut self) {
        self.view = Mat4::look_at(&self.eye, &self.target, &self.up);
        self.projection = Mat4::perspective_rh_zo(self.fov_y, self.aspect, self.near, self.far);
    }

    /// Move the camera
    pub fn set_eye(&mut self, eye: Vec3) {
        self.eye = eye;
        log::trace!("Camera eye updated to: {:?}", eye);
    }

    /// Change the look-at point
    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
        log::trace!("Camera target updated to: {:?}", target);
    }

    /// Set target and up vector together
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        self.target = target;
        self.up = up;
        log::trace!("Camera look_at updated - target: {:?}, up: {:?}", target, up);
    }

    /// Set the vertical field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov_y = utils::deg_to_rad(fov_degrees);
    }

    /// Set near and far clip distances
    pub fn set_clip(&mut self, near: f32, far: f32) {
        self.near = near;
        self.far = far;
    }

    /// Update the aspect ratio for viewport changes
    ///
    /// Only logs changes larger than 0.01 to keep resize storms quiet.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// View matrix from the last [`update`](Self::update)
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    /// Projection matrix from the last [`update`](Self::update)
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    /// `projection * view` from the last [`update`](Self::update)
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * self.view
    }
}

impl Default for Camera {
    /// Third-person view of a ground-level scene
    ///
    /// - Eye: (0, 6, 10), above and behind the origin
    /// - Target: (0, 2, 0)
    /// - Up: +Y
    /// - FOV: 60 degrees
    /// - Aspect: 640 / 480
    /// - Clip: 0.1 .. 1000
    fn default() -> Self {
        Self::perspective(
            Vec3::new(0.0, 6.0, 10.0),
            Vec3::new(0.0, 2.0, 0.0),
            60.0,
            640.0 / 480.0,
            0.1,
            1000.0,
        )
    }
}
