//! Drifting cubes
//!
//! Cubes move at constant velocity, bounce off the model bounds by
//! reflecting the inward part of their velocity, and are kept inside a
//! containment sphere by a cruder pull-back that reverses the whole velocity.

use crate::core::CubeSettings;
use crate::foundation::collections::MeshHandle;
use crate::foundation::math::Vec3;
use crate::physics::{collision, Aabb, ModelBounds};

/// What happened to a cube during one tick
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CubeStep {
    /// The cube overlapped the model and was pushed out
    pub collided: bool,
    /// The cube left the containment sphere and was pulled back
    pub contained: bool,
}

/// A small drifting cube
#[derive(Debug, Clone)]
pub struct DriftCube {
    mesh: MeshHandle,
    size: f32,
    /// Current world position
    pub position: Vec3,
    /// Displacement per tick
    pub velocity: Vec3,
}

impl DriftCube {
    /// Create a cube bound to `mesh`
    pub fn new(mesh: MeshHandle, size: f32, position: Vec3, velocity: Vec3) -> Self {
        Self {
            mesh,
            size,
            position,
            velocity,
        }
    }

    /// World-space box of the cube
    pub fn aabb(&self) -> Aabb {
        Aabb::cube(self.position, self.size)
    }

    /// Advance one tick against the optional model bounds
    pub fn update(&mut self, bounds: Option<&ModelBounds>, settings: &CubeSettings) -> CubeStep {
        let mut step = CubeStep::default();

        self.position += self.velocity;

        if let Some(bounds) = bounds {
            if let Some(contact) = collision::detect_contact(&self.aabb(), self.position, bounds) {
                self.velocity = collision::reflect_inward(self.velocity, &contact.normal);
                self.position += contact.normal * settings.push_out;
                step.collided = true;
            }
        }

        if self.position.magnitude() > settings.boundary_radius {
            self.position *= settings.pullback;
            self.velocity = -self.velocity;
            step.contained = true;
        }

        step
    }

    /// Scene node owned by this cube
    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    /// Edge length
    pub fn size(&self) -> f32 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> ModelBounds {
        ModelBounds::from_aabb(Aabb::from_center_extents(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)))
    }

    fn cube(position: Vec3, velocity: Vec3) -> DriftCube {
        DriftCube::new(MeshHandle::default(), 0.1, position, velocity)
    }

    #[test]
    fn test_free_drift_integrates_velocity() {
        let settings = CubeSettings::default();
        let mut cube = cube(Vec3::new(3.0, 0.0, 0.0), Vec3::new(0.01, -0.02, 0.005));

        let step = cube.update(Some(&model()), &settings);

        assert_eq!(step, CubeStep::default());
        assert_relative_eq!(cube.position, Vec3::new(3.01, -0.02, 0.005), epsilon = 1e-6);
        assert_eq!(cube.velocity, Vec3::new(0.01, -0.02, 0.005));
    }

    #[test]
    fn test_inward_cube_bounces_off_model() {
        let settings = CubeSettings::default();
        let velocity = Vec3::new(-0.02, 0.0, 0.0);
        let mut cube = cube(Vec3::new(1.06, 0.0, 0.0), velocity);

        let step = cube.update(Some(&model()), &settings);

        assert!(step.collided);
        assert!(!step.contained);
        assert_relative_eq!(cube.velocity, Vec3::new(0.02, 0.0, 0.0), epsilon = 1e-7);
        // integrated to 1.04, then pushed out by 0.1
        assert_relative_eq!(cube.position, Vec3::new(1.14, 0.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_outward_cube_pushed_but_not_reflected() {
        let settings = CubeSettings::default();
        let velocity = Vec3::new(0.01, 0.005, 0.0);
        let mut cube = cube(Vec3::new(0.9, 0.0, 0.0), velocity);

        let step = cube.update(Some(&model()), &settings);

        assert!(step.collided);
        assert_eq!(cube.velocity, velocity);
    }

    #[test]
    fn test_containment_pulls_back_and_reverses() {
        let settings = CubeSettings::default();
        let velocity = Vec3::new(0.02, 0.0, 0.0);
        let mut cube = cube(Vec3::new(6.99, 0.0, 0.0), velocity);

        let step = cube.update(None, &settings);

        assert!(step.contained);
        assert_relative_eq!(cube.position.x, 7.01 * 0.95, epsilon = 1e-5);
        assert_eq!(cube.velocity, -velocity);
        assert!(cube.position.magnitude() < 7.0 * 0.95 + 0.02);
    }

    #[test]
    fn test_absent_bounds_skip_collision() {
        let settings = CubeSettings::default();
        let velocity = Vec3::new(-0.02, 0.01, 0.0);
        // Sitting right where the model would be
        let mut cube = cube(Vec3::new(0.5, 0.0, 0.0), velocity);

        for _ in 0..20 {
            let step = cube.update(None, &settings);
            assert!(!step.collided);
        }
        assert_eq!(cube.velocity, velocity);
    }

    #[test]
    fn test_cube_at_model_centre_stays_finite() {
        let settings = CubeSettings::default();
        let velocity = Vec3::new(0.01, 0.0, 0.0);
        // Integrates exactly onto the centre
        let mut cube = cube(Vec3::new(-0.01, 0.0, 0.0), velocity);

        let step = cube.update(Some(&model()), &settings);

        assert!(!step.collided);
        assert!(cube.position.iter().all(|c| c.is_finite()));
        assert!(cube.velocity.iter().all(|c| c.is_finite()));
        assert_eq!(cube.velocity, velocity);
    }
}
