//! Initial placement sampling for the procedural objects
//!
//! Drift cubes are rejection-sampled from a spherical shell around the
//! model. The loop is capped; when the cap is hit the last sample is pushed
//! out radially so the exclusion guarantee holds for any random source.

use rand::Rng;

use crate::core::CubeSettings;
use crate::foundation::math::{constants, utils, Vec3};
use crate::physics::ModelBounds;

/// Result of sampling one cube position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Accepted position
    pub position: Vec3,
    /// Number of samples drawn
    pub attempts: u32,
    /// Whether the attempt cap was hit and the last sample was projected
    pub projected: bool,
}

/// Inner radius of the cube shell: model sphere radius (or the default) plus clearance
pub fn cube_inner_radius(bounds: Option<&ModelBounds>, settings: &CubeSettings) -> f32 {
    bounds.map_or(settings.default_model_radius, ModelBounds::radius) + settings.clearance
}

/// Draw a point of the cube shell, before the exclusion test
fn sample_shell_point<R: Rng + ?Sized>(rng: &mut R, inner_radius: f32, settings: &CubeSettings) -> Vec3 {
    let theta = rng.gen::<f32>() * constants::TAU;
    let phi = rng.gen::<f32>() * constants::PI;
    let radius = inner_radius + rng.gen::<f32>() * settings.shell_depth;
    utils::spherical_to_cartesian(theta, phi, radius) + Vec3::new(0.0, settings.vertical_offset, 0.0)
}

/// Sample a cube position at least `inner_radius + acceptance_margin` from the origin
pub fn sample_cube_position<R: Rng + ?Sized>(
    rng: &mut R,
    inner_radius: f32,
    settings: &CubeSettings,
) -> Placement {
    let min_distance = inner_radius + settings.acceptance_margin;
    let max_attempts = settings.max_placement_attempts.max(1);
    let mut last = Vec3::zeros();

    for attempt in 1..=max_attempts {
        last = sample_shell_point(rng, inner_radius, settings);
        if last.magnitude() >= min_distance {
            return Placement {
                position: last,
                attempts: attempt,
                projected: false,
            };
        }
    }

    let direction = utils::try_normalize(last).unwrap_or_else(Vec3::y);
    let position = direction * min_distance;
    log::warn!(
        "Cube placement gave up after {} attempts, projecting {:?} to {:?}",
        max_attempts,
        last,
        position
    );
    Placement {
        position,
        attempts: max_attempts,
        projected: true,
    }
}

/// Random drift velocity, each component in `[-scale/2, scale/2)`
pub fn sample_drift_velocity<R: Rng + ?Sized>(rng: &mut R, settings: &CubeSettings) -> Vec3 {
    let mut component = || (rng.gen::<f32>() - 0.5) * settings.velocity_scale;
    Vec3::new(component(), component(), component())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Aabb;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    /// Cycles through a fixed list of raw outputs
    struct ScriptedRng {
        values: Vec<u32>,
        index: usize,
    }

    impl ScriptedRng {
        fn new(values: Vec<u32>) -> Self {
            Self { values, index: 0 }
        }
    }

    impl RngCore for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.index % self.values.len()];
            self.index += 1;
            value
        }

        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for chunk in dest.chunks_mut(4) {
                let bytes = self.next_u32().to_le_bytes();
                chunk.copy_from_slice(&bytes[..chunk.len()]);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn test_inner_radius_default_and_loaded() {
        let settings = CubeSettings::default();
        assert_eq!(cube_inner_radius(None, &settings), 3.0);

        let bounds = ModelBounds::from_aabb(Aabb::new(Vec3::new(-3.0, -4.0, 0.0), Vec3::new(3.0, 4.0, 0.0)));
        assert!((cube_inner_radius(Some(&bounds), &settings) - 5.5).abs() < 1e-6);
    }

    #[test]
    fn test_thousand_samples_respect_exclusion() {
        let settings = CubeSettings::default();
        let inner = 3.0;
        let mut rng = StdRng::seed_from_u64(0xB0B1E5);

        for _ in 0..1000 {
            let placement = sample_cube_position(&mut rng, inner, &settings);
            assert!(placement.position.magnitude() >= inner + settings.acceptance_margin);
            assert!(placement.position.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn test_adversarial_source_terminates_outside_exclusion() {
        // theta = 0, phi ~ PI, radius = inner: the point lands at |inner - 1.5|
        // below the origin every time, which is always rejected.
        let mut rng = ScriptedRng::new(vec![0, u32::MAX, 0]);
        let settings = CubeSettings::default();
        let inner = 3.0;

        let placement = sample_cube_position(&mut rng, inner, &settings);

        assert!(placement.projected);
        assert_eq!(placement.attempts, settings.max_placement_attempts);
        assert!(placement.position.magnitude() >= inner + settings.acceptance_margin - 1e-5);
        assert!(placement.position.y < 0.0);
    }

    #[test]
    fn test_near_origin_sample_projects_cleanly() {
        // inner radius 1.5 with phi ~ PI puts the sample on top of the origin
        let mut rng = ScriptedRng::new(vec![0, u32::MAX, 0]);
        let mut settings = CubeSettings::default();
        settings.max_placement_attempts = 3;

        let placement = sample_cube_position(&mut rng, 1.5, &settings);

        assert!(placement.projected);
        assert!(placement.position.x.is_finite() && placement.position.z.is_finite());
        assert!(placement.position.magnitude() >= 1.5 + settings.acceptance_margin - 1e-5);
    }

    #[test]
    fn test_drift_velocity_bounds() {
        let settings = CubeSettings::default();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            let velocity = sample_drift_velocity(&mut rng, &settings);
            assert!(velocity.iter().all(|c| (-0.02..0.02).contains(c)));
        }
    }
}
