//! # Core Module
//!
//! Shared configuration used by every subsystem of the scene.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration for the frame loop, camera,
//!   procedural objects and model asset

pub mod config;

// Re-export commonly used config types
pub use config::{
    SceneConfig,
    EngineSettings,
    CameraSettings,
    BubbleSettings,
    CubeSettings,
    AssetSettings,
    SampleRange,
};
pub use crate::config::{Config, ConfigError};
