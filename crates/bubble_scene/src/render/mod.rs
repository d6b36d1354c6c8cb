//! # Rendering
//!
//! Rasterization lives behind the [`Renderer`] trait so the scene and frame
//! loop never depend on a graphics API. Only a headless backend ships.

mod headless;

pub use headless::HeadlessRenderer;

use thiserror::Error;

use crate::camera::Camera;
use crate::scene::Scene;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// The backend failed to present a frame
    #[error("Render backend error: {0}")]
    Backend(String),
}

/// Draws a scene from a camera
pub trait Renderer {
    /// Render one frame
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError>;
}
