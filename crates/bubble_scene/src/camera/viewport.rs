//! Display surface dimensions

use super::perspective::Camera;

/// Size of the render target in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Create a viewport
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height, or 1.0 for a degenerate viewport
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    /// React to a surface resize by updating the camera projection
    ///
    /// Returns `false` and leaves everything untouched for a zero-sized surface,
    /// which some platforms report while minimized.
    pub fn resize(&mut self, width: u32, height: u32, camera: &mut Camera) -> bool {
        if width == 0 || height == 0 {
            log::warn!("Ignoring resize to degenerate surface {}x{}", width, height);
            return false;
        }
        self.width = width;
        self.height = height;
        camera.set_aspect_ratio(self.aspect_ratio());
        log::debug!("Viewport resized to {}x{}", width, height);
        true
    }
}
