//! # Perspective Camera
//!
//! Position, target and projection parameters for the scene camera. The
//! orbit controller moves it; the renderer reads its matrices.

use crate::core::CameraSettings;
use crate::foundation::math::{utils, Mat4, Point3, Vec3};

/// 3D perspective camera, right-handed and Y-up
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,

    /// Point the camera is looking at in world space
    pub target: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Field of view angle in radians
    pub fov: f32,

    /// Aspect ratio (width / height) for projection calculations
    pub aspect: f32,

    /// Distance to near clipping plane
    pub near: f32,

    /// Distance to far clipping plane
    pub far: f32,
}

impl Camera {
    /// Create a new perspective camera with standard Y-up orientation
    ///
    /// # Arguments
    /// * `position` - Camera position in world space
    /// * `fov_degrees` - Field of view angle in degrees (converted to radians internally)
    /// * `aspect` - Aspect ratio (width / height) of the viewport
    /// * `near` - Distance to near clipping plane (must be > 0)
    /// * `far` - Distance to far clipping plane (must be > near)
    pub fn perspective(position: Vec3, fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            position,
            target: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            fov: utils::deg_to_rad(fov_degrees),
            aspect,
            near,
            far,
        }
    }

    /// Build the camera described by the settings for a viewport aspect ratio
    pub fn from_settings(settings: &CameraSettings, aspect: f32) -> Self {
        let mut camera = Self::perspective(
            settings.position,
            settings.fov_degrees,
            aspect,
            settings.near,
            settings.far,
        );
        camera.look_at(settings.target);
        camera
    }

    /// Point the camera at `target`
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
        log::trace!("Camera look_at updated - target: {:?}", target);
    }

    /// Update camera aspect ratio for viewport changes
    ///
    /// Only logs changes larger than 0.01 to keep resize storms quiet.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if (self.aspect - aspect).abs() > 0.01 {
            log::info!("Camera aspect ratio changed: {:.3} -> {:.3}", self.aspect, aspect);
        }
        self.aspect = aspect;
    }

    /// World-to-camera transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            &Point3::from(self.position),
            &Point3::from(self.target),
            &self.up,
        )
    }

    /// Perspective projection (OpenGL-style clip space)
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::new_perspective(self.aspect, self.fov, self.near, self.far)
    }

    /// Combined projection × view
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
