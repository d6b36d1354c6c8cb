//! Damped orbit controller
//!
//! Rotates the camera around a target point in spherical coordinates. The
//! distance and polar angle are clamped to ranges that the default settings
//! collapse to single values, so the camera only spins horizontally at a
//! fixed range. User input is queued as a pending azimuth delta that each
//! `update` consumes a damping fraction of.

use crate::core::CameraSettings;
use crate::foundation::math::{utils, Vec3};
use super::perspective::Camera;

/// Below this, queued rotation is dropped
const SETTLE_EPSILON: f32 = 1e-6;

/// Orbit-style camera controller restricted to azimuthal rotation
#[derive(Debug, Clone)]
pub struct OrbitController {
    target: Vec3,
    min_distance: f32,
    max_distance: f32,
    min_polar: f32,
    max_polar: f32,
    damping: f32,
    pending_azimuth: f32,
}

impl OrbitController {
    /// Controller locked to the settings' distance and polar angle
    pub fn new(settings: &CameraSettings) -> Self {
        Self {
            target: settings.target,
            min_distance: settings.distance,
            max_distance: settings.distance,
            min_polar: settings.polar_angle,
            max_polar: settings.polar_angle,
            damping: settings.damping,
            pending_azimuth: 0.0,
        }
    }

    /// Orbit target
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Move the orbit target; takes effect on the next update
    pub fn set_target(&mut self, target: Vec3) {
        log::debug!("Orbit target moved to {:?}", target);
        self.target = target;
    }

    /// Queue a horizontal rotation in radians (positive turns counter-clockwise seen from above)
    pub fn rotate_azimuth(&mut self, angle: f32) {
        self.pending_azimuth += angle;
    }

    /// Rotation still waiting to be applied
    pub fn pending_azimuth(&self) -> f32 {
        self.pending_azimuth
    }

    /// Apply one damped step and reposition the camera
    ///
    /// Returns `true` when the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let offset = camera.position - self.target;
        let distance = offset.magnitude();

        let (azimuth, polar) = if distance > f32::EPSILON {
            let polar = (offset.y / distance).clamp(-1.0, 1.0).acos();
            (offset.x.atan2(offset.z), polar)
        } else {
            (0.0, self.min_polar)
        };

        let azimuth = azimuth + self.pending_azimuth * self.damping;
        let polar = polar.clamp(self.min_polar, self.max_polar);
        let distance = distance.clamp(self.min_distance, self.max_distance);

        self.pending_azimuth *= 1.0 - self.damping;
        if self.pending_azimuth.abs() < SETTLE_EPSILON {
            self.pending_azimuth = 0.0;
        }

        // Azimuth is measured from +Z towards +X
        let ring = polar.sin() * distance;
        let position = self.target + Vec3::new(ring * azimuth.sin(), polar.cos() * distance, ring * azimuth.cos());

        let moved = (position - camera.position).magnitude() > SETTLE_EPSILON
            || (camera.target - self.target).magnitude() > SETTLE_EPSILON;
        camera.position = position;
        camera.look_at(self.target);
        moved
    }

    /// Current azimuth of the camera around the target, wrapped to `[0, 2π)`
    pub fn azimuth_of(&self, camera: &Camera) -> f32 {
        let offset = camera.position - self.target;
        utils::wrap_angle(offset.x.atan2(offset.z))
    }
}
