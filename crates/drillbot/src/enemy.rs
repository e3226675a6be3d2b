//! Wandering drill enemy
//!
//! An enemy is a small transform hierarchy: five body parts, a blob shadow and
//! a collision sphere, all hanging off the body node. Every
//! `turn_interval_frames` frames it picks a new heading, eases its yaw toward
//! it and keeps driving forward. Once killed it freezes in place and stops
//! drawing.

use drillbot_engine::config::{Config, ConfigError};
use drillbot_engine::foundation::math::utils::{deg_to_rad, shortest_angle_delta};
use drillbot_engine::foundation::math::{Mat4, Mat4Ext, Vec3};
use drillbot_engine::foundation::random::{RandomSource, RngSource};
use drillbot_engine::physics::{BoundingSphere, CollisionNode};
use drillbot_engine::render::RenderSink;
use drillbot_engine::scene::{Hierarchy, NodeKey, SceneError, TransformNode};
use log::{debug, info, trace};
use rand::rngs::StdRng;
use thiserror::Error;

use crate::config::EnemyConfig;
use crate::parts::{PartRole, PART_COUNT, SHADOW_VISUAL};

/// Errors raised while building an enemy
#[derive(Error, Debug)]
pub enum EnemyError {
    /// The part hierarchy could not be linked
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// The supplied settings are out of range
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Life cycle of an enemy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    /// Wandering and drawn every frame
    #[default]
    Alive,
    /// Frozen; every frame operation is a no-op
    Dead,
}

impl EnemyState {
    /// Whether frame operations should run
    pub fn is_alive(self) -> bool {
        self == Self::Alive
    }
}

/// Drill enemy with its own part hierarchy and random source
#[derive(Debug)]
pub struct Enemy<R: RandomSource = RngSource<StdRng>> {
    hierarchy: Hierarchy,
    parts: [NodeKey; PART_COUNT],
    shadow: NodeKey,
    collision: CollisionNode,
    heading_degrees: f32,
    timer: i32,
    state: EnemyState,
    config: EnemyConfig,
    random: R,
}

impl<R: RandomSource> Enemy<R> {
    /// Build the part hierarchy and drop the enemy at a random spot
    ///
    /// Draws three values from `random`: the x position, the z position and
    /// the initial heading in whole degrees.
    pub fn spawn(config: EnemyConfig, mut random: R) -> Result<Self, EnemyError> {
        config.validate()?;

        let mut hierarchy = Hierarchy::new();
        let mut parts = [NodeKey::default(); PART_COUNT];
        // Parents come first in `ALL`, so their keys are already filled in
        for role in PartRole::ALL {
            let node = role.build_node();
            parts[role.index()] = match role.parent() {
                Some(parent) => hierarchy.insert_child(parts[parent.index()], node)?,
                None => hierarchy.insert(node),
            };
        }
        let body = parts[PartRole::Body.index()];

        let extent = config.spawn_half_extent;
        let x = random.next_unit() * 2.0 * extent - extent;
        let z = random.next_unit() * 2.0 * extent - extent;
        #[allow(clippy::cast_precision_loss)]
        let heading_degrees = random.next_int(0, 360) as f32;

        if let Some(node) = hierarchy.node_mut(body) {
            node.set_translation(Vec3::new(x, config.spawn_height, z));
            node.set_rotation(Vec3::new(0.0, deg_to_rad(heading_degrees), 0.0));
        }

        let collision = CollisionNode::attach(
            &mut hierarchy,
            body,
            Vec3::new(0.0, config.collision_offset, 0.0),
            config.collision_radius,
        )?;

        let shadow = hierarchy.insert_child(
            body,
            TransformNode::new()
                .with_translation(Vec3::new(0.0, config.shadow_offset, 0.0))
                .with_visual(SHADOW_VISUAL),
        )?;

        debug!(
            "Spawned enemy at ({x:.2}, {:.2}, {z:.2}) heading {heading_degrees}°",
            config.spawn_height
        );

        let mut enemy = Self {
            hierarchy,
            parts,
            shadow,
            collision,
            heading_degrees,
            timer: config.turn_interval_frames,
            state: EnemyState::Alive,
            config,
            random,
        };
        enemy.calc();
        enemy.collision.update(&mut enemy.hierarchy);
        Ok(enemy)
    }

    /// Advance the AI by one frame
    pub fn update(&mut self) {
        if !self.state.is_alive() {
            return;
        }

        self.timer -= 1;
        if self.timer < 0 {
            self.timer = self.config.turn_interval_frames;
            let jitter = (self.random.next_unit() - 0.5) * self.config.heading_jitter_degrees;
            self.heading_degrees += jitter;
            trace!("Enemy retargeted by {jitter:.1}° to {:.1}°", self.heading_degrees);
        }

        let smoothing = self.config.turn_smoothing;
        let speed = self.config.move_speed;
        let target = deg_to_rad(self.heading_degrees);
        if let Some(body) = self.hierarchy.node_mut(self.parts[PartRole::Body.index()]) {
            let mut rotation = body.rotation();
            rotation.y += shortest_angle_delta(rotation.y, target) * smoothing;
            body.set_rotation(rotation);

            let step = Mat4::rotation_y(rotation.y).transform_vector(&Vec3::new(0.0, 0.0, -speed));
            body.set_translation(body.translation() + step);
        }

        self.calc();
        self.collision.update(&mut self.hierarchy);
    }

    /// Refresh the world matrix of every part and the shadow
    pub fn calc(&mut self) {
        if !self.state.is_alive() {
            return;
        }
        self.hierarchy.resolve_all();
    }

    /// Submit the parts, the collision overlay and the shadow
    pub fn draw(&self, sink: &mut dyn RenderSink) {
        if !self.state.is_alive() {
            return;
        }

        for key in self.parts {
            if let Some(node) = self.hierarchy.node(key) {
                node.render(sink);
            }
        }
        self.collision.render(sink);
        if let Some(shadow) = self.hierarchy.node(self.shadow) {
            shadow.render_subtractive(sink);
        }
    }

    /// Freeze the enemy for good
    pub fn kill(&mut self) {
        if self.state.is_alive() {
            info!("Enemy destroyed at {:?}", self.position());
            self.state = EnemyState::Dead;
        }
    }

    /// Whether [`kill`](Self::kill) has been called
    pub fn is_dead(&self) -> bool {
        !self.state.is_alive()
    }

    /// Current life cycle state
    pub fn state(&self) -> EnemyState {
        self.state
    }

    /// Local translation of the body
    pub fn position(&self) -> Vec3 {
        self.part(PartRole::Body).map_or_else(Vec3::zeros, TransformNode::translation)
    }

    /// Body yaw in radians
    pub fn yaw(&self) -> f32 {
        self.part(PartRole::Body).map_or(0.0, |body| body.rotation().y)
    }

    /// Desired heading in degrees
    pub fn heading_degrees(&self) -> f32 {
        self.heading_degrees
    }

    /// Override the desired heading
    pub fn set_heading_degrees(&mut self, heading: f32) {
        self.heading_degrees = heading;
    }

    /// Frames left before the next heading change
    pub fn timer(&self) -> i32 {
        self.timer
    }

    /// Settings the enemy was spawned with
    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    /// Node of a body part
    pub fn part(&self, role: PartRole) -> Option<&TransformNode> {
        self.hierarchy.node(self.parts[role.index()])
    }

    /// Mutable node of a body part
    pub fn part_mut(&mut self, role: PartRole) -> Option<&mut TransformNode> {
        self.hierarchy.node_mut(self.parts[role.index()])
    }

    /// Key of a body part in [`hierarchy`](Self::hierarchy)
    pub fn part_key(&self, role: PartRole) -> NodeKey {
        self.parts[role.index()]
    }

    /// Shadow node
    pub fn shadow(&self) -> Option<&TransformNode> {
        self.hierarchy.node(self.shadow)
    }

    /// World collision sphere from the last update
    pub fn collision_sphere(&self) -> &BoundingSphere {
        self.collision.world_sphere()
    }

    /// All nodes owned by this enemy
    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }
}
