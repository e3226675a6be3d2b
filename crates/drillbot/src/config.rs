//! Game configuration
//!
//! Every tuned constant of the enemy AI and the default camera lives here so
//! it can be adjusted from a TOML or RON file without a rebuild.

use drillbot_engine::config::{Config, ConfigError};
use drillbot_engine::foundation::math::Vec3;
use drillbot_engine::render::Camera;
use serde::{Deserialize, Serialize};

/// Enemy wandering and layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Frames between heading changes
    pub turn_interval_frames: i32,

    /// Full span of a heading change in degrees (180 gives ±90°)
    pub heading_jitter_degrees: f32,

    /// Fraction of the remaining yaw error closed each frame
    pub turn_smoothing: f32,

    /// Forward distance covered each frame
    pub move_speed: f32,

    /// Spawn x and z are drawn from `[-extent, extent]`
    pub spawn_half_extent: f32,

    /// Height of the body above ground at spawn
    pub spawn_height: f32,

    /// Collision sphere radius
    pub collision_radius: f32,

    /// Collision sphere height above the body origin
    pub collision_offset: f32,

    /// Shadow height relative to the body origin
    pub shadow_offset: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            turn_interval_frames: 60,
            heading_jitter_degrees: 180.0,
            turn_smoothing: 0.01,
            move_speed: 0.02,
            spawn_half_extent: 10.0,
            spawn_height: 0.5,
            collision_radius: 1.0,
            collision_offset: 0.3,
            shadow_offset: -0.4,
        }
    }
}

impl Config for EnemyConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.turn_interval_frames < 0 {
            return Err(invalid("turn_interval_frames", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.turn_smoothing) {
            return Err(invalid("turn_smoothing", "must be within [0, 1]"));
        }
        non_negative("heading_jitter_degrees", self.heading_jitter_degrees)?;
        finite("move_speed", self.move_speed)?;
        non_negative("spawn_half_extent", self.spawn_half_extent)?;
        finite("spawn_height", self.spawn_height)?;
        positive("collision_radius", self.collision_radius)?;
        finite("collision_offset", self.collision_offset)?;
        finite("shadow_offset", self.shadow_offset)
    }
}

/// Camera placement and projection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Camera position
    pub eye: Vec3,
    /// Look-at point
    pub target: Vec3,
    /// Up vector
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Width / height
    pub aspect: f32,
    /// Near clip distance
    pub near: f32,
    /// Far clip distance
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 6.0, 10.0),
            target: Vec3::new(0.0, 2.0, 0.0),
            up: Vec3::y(),
            fov_degrees: 60.0,
            aspect: 640.0 / 480.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraConfig {
    /// Build a camera with these parameters
    pub fn to_camera(&self) -> Camera {
        let mut camera = Camera::perspective(
            self.eye,
            self.target,
            self.fov_degrees,
            self.aspect,
            self.near,
            self.far,
        );
        camera.up = self.up;
        camera
    }
}

impl Config for CameraConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        finite_vec("eye", &self.eye)?;
        finite_vec("target", &self.target)?;
        finite_vec("up", &self.up)?;
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(invalid("fov_degrees", "must be within (0, 180)"));
        }
        positive("aspect", self.aspect)?;
        positive("near", self.near)?;
        finite("far", self.far)?;
        if self.far <= self.near {
            return Err(invalid("near/far", "require 0 < near < far"));
        }
        if self.eye == self.target {
            return Err(invalid("eye", "must differ from target"));
        }
        Ok(())
    }
}

/// Top-level settings for a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// Number of enemies spawned
    pub enemy_count: usize,

    /// Seed for reproducible runs; `None` seeds from OS entropy
    pub seed: Option<u64>,

    /// Camera settings
    pub camera: CameraConfig,

    /// Enemy settings shared by every enemy
    pub enemy: EnemyConfig,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            enemy_count: 5,
            seed: None,
            camera: CameraConfig::default(),
            enemy: EnemyConfig::default(),
        }
    }
}

impl Config for StageConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.camera.validate()?;
        self.enemy.validate()
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.to_string(),
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

fn finite_vec(field: &'static str, value: &Vec3) -> Result<(), ConfigError> {
    if value.iter().all(|component| component.is_finite()) {
        Ok(())
    } else {
        Err(invalid(field, "must be finite"))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(invalid(field, "must not be negative"));
    }
    Ok(())
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(invalid(field, "must be positive"));
    }
    Ok(())
}
