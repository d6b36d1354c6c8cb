//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the scene:
//! - Math types and spherical sampling helpers
//! - Handle collections for scene nodes
//! - Frame timing
//! - Logging utilities

pub mod math;
pub mod collections;
pub mod time;
pub mod logging;
