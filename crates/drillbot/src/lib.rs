//! # Drillbot
//!
//! A wandering drill enemy built on `drillbot_engine`: part layout, AI,
//! settings and a small stage that drives several enemies under one camera.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod enemy;
pub mod parts;
pub mod stage;

/// Common imports for game users
pub mod prelude {
    pub use crate::{
        config::{CameraConfig, EnemyConfig, StageConfig},
        enemy::{Enemy, EnemyError, EnemyState},
        parts::{PartRole, PART_COUNT, SHADOW_VISUAL},
        stage::Stage,
    };
}
