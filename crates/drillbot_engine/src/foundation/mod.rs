//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Math types, matrix constructors and angle helpers
//! - Injectable random sources
//! - Logging utilities

pub mod math;
pub mod random;
pub mod logging;
