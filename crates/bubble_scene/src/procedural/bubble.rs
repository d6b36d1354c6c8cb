//! Floating bubbles
//!
//! Each bubble sits on a vertical cylinder-like orbit: the polar angle and
//! shell radius chosen at spawn fix its distance from the vertical axis, the
//! azimuth slowly advances and the bubble rises until it is recycled near
//! the bottom of the scene.

use rand::Rng;

use crate::core::BubbleSettings;
use crate::foundation::collections::MeshHandle;
use crate::foundation::math::{constants, utils, Vec3};

/// A floating bubble sphere
#[derive(Debug, Clone)]
pub struct Bubble {
    mesh: MeshHandle,
    theta: f32,
    phi: f32,
    radius: f32,
    speed: f32,
    size: f32,
    position: Vec3,
}

/// Initial parameters drawn for a bubble before it owns a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleSeed {
    /// Azimuth in `[0, 2π)`
    pub theta: f32,
    /// Polar angle in `[0, π)`
    pub phi: f32,
    /// Shell radius
    pub radius: f32,
    /// Speed multiplier
    pub speed: f32,
    /// Visual sphere radius
    pub size: f32,
}

impl BubbleSeed {
    /// Draw bubble parameters
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, settings: &BubbleSettings) -> Self {
        let size = settings.size.sample(rng);
        let theta = rng.gen::<f32>() * constants::TAU;
        let phi = rng.gen::<f32>() * constants::PI;
        let radius = settings.radius.sample(rng);
        let speed = settings.speed.sample(rng);
        Self { theta, phi, radius, speed, size }
    }

    /// Spawn position: the shell point lifted and shifted forward
    pub fn position(&self, settings: &BubbleSettings) -> Vec3 {
        utils::spherical_to_cartesian(self.theta, self.phi, self.radius)
            + Vec3::new(0.0, settings.vertical_offset, settings.forward_offset)
    }
}

impl Bubble {
    /// Create a bubble bound to `mesh`
    pub fn new(mesh: MeshHandle, seed: BubbleSeed, settings: &BubbleSettings) -> Self {
        Self {
            mesh,
            theta: seed.theta,
            phi: seed.phi,
            radius: seed.radius,
            speed: seed.speed,
            size: seed.size,
            position: seed.position(settings),
        }
    }

    /// Advance one tick; returns `true` when the bubble was recycled
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R, settings: &BubbleSettings) -> bool {
        self.position.y += settings.rise_rate * self.speed;

        self.theta = utils::wrap_angle(self.theta + settings.orbit_rate * self.speed);
        let ring = self.phi.sin() * self.radius;
        self.position.x = ring * self.theta.cos();
        self.position.z = ring * self.theta.sin();

        if self.position.y > settings.ceiling {
            self.position.y = settings.reset_base + rng.gen::<f32>() * settings.reset_span;
            return true;
        }
        false
    }

    /// Scene node owned by this bubble
    pub fn mesh(&self) -> MeshHandle {
        self.mesh
    }

    /// Current azimuth
    pub fn theta(&self) -> f32 {
        self.theta
    }

    /// Polar angle fixed at spawn
    pub fn phi(&self) -> f32 {
        self.phi
    }

    /// Shell radius fixed at spawn
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Speed multiplier
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Visual sphere radius
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Current world position
    pub fn position(&self) -> Vec3 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seed() -> BubbleSeed {
        BubbleSeed {
            theta: 0.0,
            phi: constants::HALF_PI,
            radius: 4.0,
            speed: 0.5,
            size: 1.2,
        }
    }

    #[test]
    fn test_spawn_position_includes_offsets() {
        let settings = BubbleSettings::default();
        let bubble = Bubble::new(MeshHandle::default(), seed(), &settings);
        assert_relative_eq!(bubble.position(), Vec3::new(4.0, 1.5, 2.5), epsilon = 1e-5);
    }

    #[test]
    fn test_update_rises_and_orbits() {
        let settings = BubbleSettings::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut bubble = Bubble::new(MeshHandle::default(), seed(), &settings);

        let recycled = bubble.update(&mut rng, &settings);

        assert!(!recycled);
        assert_relative_eq!(bubble.position().y, 1.5 + 0.01 * 0.5, epsilon = 1e-6);
        assert_relative_eq!(bubble.theta(), 0.002 * 0.5, epsilon = 1e-7);
        assert_relative_eq!(bubble.position().x, 4.0 * (0.001_f32).cos(), epsilon = 1e-5);
        assert_relative_eq!(bubble.position().z, 4.0 * (0.001_f32).sin(), epsilon = 1e-6);
    }

    #[test]
    fn test_recycle_lands_in_reset_band() {
        let settings = BubbleSettings::default();
        let mut rng = StdRng::seed_from_u64(2);
        let mut bubble = Bubble::new(MeshHandle::default(), seed(), &settings);
        bubble.position.y = 5.999;

        assert!(bubble.update(&mut rng, &settings));
        assert!((1.5..2.5).contains(&bubble.position().y));
    }

    #[test]
    fn test_seed_sampling_ranges() {
        let settings = BubbleSettings::default();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let seed = BubbleSeed::sample(&mut rng, &settings);
            assert!((0.0..constants::TAU).contains(&seed.theta));
            assert!((0.0..constants::PI).contains(&seed.phi));
            assert!((3.5..6.0).contains(&seed.radius));
            assert!((0.18..0.56).contains(&seed.speed));
            assert!((1.0..2.7).contains(&seed.size));
        }
    }
}
