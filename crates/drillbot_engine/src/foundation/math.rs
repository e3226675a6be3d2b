//! Math utilities and types
//!
//! Provides the vector and matrix aliases used by the scene hierarchy, the
//! camera and the enemy AI, plus the angle helpers needed for yaw smoothing.

pub use nalgebra::{Vector3, Vector4, Matrix4, Unit};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type (used for RGBA colors in debug shapes)
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants::{DEG_TO_RAD, PI, RAD_TO_DEG, TAU};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * RAD_TO_DEG
    }

    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Signed angle (radians) to add to `current` to reach `target` along
    /// the shorter arc.
    ///
    /// Both inputs may lie anywhere on the real line. The result is in
    /// `[-PI, PI]` and `current + delta` is congruent to `target` modulo
    /// `TAU`.
    ///
    /// # Half turns
    /// An exact half turn keeps the sign of the raw difference, so
    /// `shortest_angle_delta(0.0, PI) == PI` while
    /// `shortest_angle_delta(PI, 0.0) == -PI`. Both are shortest paths.
    ///
    /// # Example
    /// ```rust
    /// use drillbot_engine::foundation::math::utils::{deg_to_rad, shortest_angle_delta};
    ///
    /// // 170° -> -170° crosses the wrap: +20°, not -340°
    /// let delta = shortest_angle_delta(deg_to_rad(170.0), deg_to_rad(-170.0));
    /// assert!((delta - deg_to_rad(20.0)).abs() < 1e-5);
    /// ```
    pub fn shortest_angle_delta(current: f32, target: f32) -> f32 {
        let mut delta = target - current;
        if delta > PI {
            delta -= TAU;
        } else if delta < -PI {
            delta += TAU;
        }

        // A single wrap only covers differences within three half turns
        if delta > PI || delta < -PI {
            delta = (delta + PI).rem_euclid(TAU) - PI;
        }
        delta
    }
}

/// Extension trait for Mat4 with the transform constructors the scene needs
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a rotation matrix around the Z axis
    fn rotation_z(angle: f32) -> Mat4;

    /// Create a rotation from Euler angles `(pitch, yaw, roll)` stored as
    /// `(x, y, z)`; roll is applied first, then pitch, then yaw.
    fn from_euler_yxz(euler: &Vec3) -> Mat4;

    /// Compose translation, Euler rotation and scale into `T * R * S`
    fn from_trs(translation: &Vec3, euler: &Vec3, scale: &Vec3) -> Mat4;

    /// Create a right-handed look-at view matrix
    fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4;

    /// Create a right-handed perspective projection with depth mapped to `[0, 1]`
    fn perspective_rh_zo(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn rotation_z(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::z_axis(), angle)
    }

    fn from_euler_yxz(euler: &Vec3) -> Mat4 {
        Mat4::rotation_y(euler.y) * Mat4::rotation_x(euler.x) * Mat4::rotation_z(euler.z)
    }

    fn from_trs(translation: &Vec3, euler: &Vec3, scale: &Vec3) -> Mat4 {
        Mat4::new_translation(translation)
            * Mat4::from_euler_yxz(euler)
            * Mat4::new_nonuniform_scaling(scale)
    }

    fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
        let forward = (target - eye).normalize();
        let right = forward.cross(up).normalize();
        let camera_up = right.cross(&forward);

        Mat4::new(
            right.x, right.y, right.z, -right.dot(eye),
            camera_up.x, camera_up.y, camera_up.z, -camera_up.dot(eye),
            -forward.x, -forward.y, -forward.z, forward.dot(eye),
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn perspective_rh_zo(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // P = [ys/a  0    0          0          ]
        //     [0     ys   0          0          ]
        //     [0     0    f/(n-f)    nf/(n-f)   ]
        //     [0     0    -1         0          ]
        let y_scale = 1.0 / (fov_y * 0.5).tan();
        let depth = near - far;

        let mut result = Mat4::zeros();
        result[(0, 0)] = y_scale / aspect;
        result[(1, 1)] = y_scale;
        result[(2, 2)] = far / depth;
        result[(2, 3)] = near * far / depth;
        result[(3, 2)] = -1.0;
        result
    }
}
