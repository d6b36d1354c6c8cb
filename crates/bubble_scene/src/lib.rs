//! # Bubble Scene
//!
//! A decorative 3D scene: a loaded model sits behind a field of slowly
//! rising bubbles and drifting cubes that bounce off the model's bounds,
//! viewed through a damped orbit camera.
//!
//! ## Features
//!
//! - **Procedural Objects**: Bubbles on fixed orbits and cubes with simple
//!   collision and containment
//! - **Asynchronous Model Loading**: One model loaded off the frame loop,
//!   its bounds published to the world context on completion
//! - **Orbit Camera**: Azimuth-only rotation at a locked distance
//! - **Pluggable Rendering**: Any [`render::Renderer`]; a headless one ships
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bubble_scene::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SceneConfig::default().with_max_frames(600);
//!     let mut app = SceneApp::start(config.clone(), Some(Box::new(ObjModelLoader::new())))?;
//!     let mut renderer = HeadlessRenderer::new();
//!     FrameLoop::new(&config.engine).run(&mut app, &mut renderer)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod core;
pub mod config;

pub mod foundation;
pub mod physics;
pub mod scene;
pub mod procedural;
pub mod camera;
pub mod assets;
pub mod render;

mod application;
mod engine;

#[cfg(test)]
mod tests;

pub use application::{AppEvent, SceneApp, SceneError};
pub use engine::FrameLoop;

/// Common imports for scene users
pub mod prelude {
    #[cfg(feature = "obj")]
    pub use crate::assets::ObjModelLoader;
    pub use crate::{
        AppEvent, SceneApp, SceneError, FrameLoop,
        assets::{AssetError, AssetLoader, LoadedModel},
        camera::{Camera, OrbitController, Viewport},
        core::{Config, ConfigError, SceneConfig},
        foundation::{
            logging,
            math::{Vec3, Mat4, Transform},
            time::{Timer, Stopwatch},
        },
        physics::{Aabb, BoundingSphere, ModelBounds},
        procedural::{Bubble, DriftCube, ProceduralObjects, TickSummary},
        render::{HeadlessRenderer, Renderer, RenderError},
        scene::{MeshHandle, MeshShape, Scene, WorldContext},
    };
}
