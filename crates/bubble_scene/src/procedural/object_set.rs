//! The full set of procedural objects and its per-tick advance

use rand::Rng;

use crate::core::{BubbleSettings, CubeSettings};
use crate::scene::{MeshShape, Scene, WorldContext};
use super::bubble::{Bubble, BubbleSeed};
use super::drift_cube::DriftCube;
use super::placement;

/// Counters gathered while advancing one tick
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickSummary {
    /// Bubbles that floated past the ceiling and were recycled
    pub recycled_bubbles: usize,
    /// Cubes that hit the model
    pub cube_collisions: usize,
    /// Cubes pulled back into the containment sphere
    pub cube_containments: usize,
}

/// Bubbles and drift cubes, created once and advanced every tick
pub struct ProceduralObjects {
    bubbles: Vec<Bubble>,
    cubes: Vec<DriftCube>,
    bubble_settings: BubbleSettings,
    cube_settings: CubeSettings,
}

impl ProceduralObjects {
    /// Spawn every bubble and cube and register their meshes with `scene`
    ///
    /// Cube placement keeps clear of the model bounds published in `world`,
    /// or of the default radius when no model has loaded yet.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        bubble_settings: &BubbleSettings,
        cube_settings: &CubeSettings,
        world: &WorldContext,
        scene: &mut Scene,
    ) -> Self {
        let bubbles = (0..bubble_settings.count)
            .map(|_| {
                let seed = BubbleSeed::sample(rng, bubble_settings);
                let mesh = scene.add(MeshShape::Sphere { radius: seed.size }, seed.position(bubble_settings));
                Bubble::new(mesh, seed, bubble_settings)
            })
            .collect::<Vec<_>>();

        let inner_radius = placement::cube_inner_radius(world.model_bounds(), cube_settings);
        let mut projected = 0;
        let cubes = (0..cube_settings.count)
            .map(|_| {
                let size = cube_settings.size.sample(rng);
                let placed = placement::sample_cube_position(rng, inner_radius, cube_settings);
                if placed.projected {
                    projected += 1;
                }
                let velocity = placement::sample_drift_velocity(rng, cube_settings);
                let mesh = scene.add(MeshShape::Cube { size }, placed.position);
                DriftCube::new(mesh, size, placed.position, velocity)
            })
            .collect::<Vec<_>>();

        log::info!(
            "Spawned {} bubbles and {} cubes (cube inner radius {:.2}, {} projected)",
            bubbles.len(),
            cubes.len(),
            inner_radius,
            projected
        );

        Self {
            bubbles,
            cubes,
            bubble_settings: bubble_settings.clone(),
            cube_settings: cube_settings.clone(),
        }
    }

    /// Advance every object by one tick and write positions back to `scene`
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        world: &WorldContext,
        scene: &mut Scene,
    ) -> TickSummary {
        let mut summary = TickSummary::default();

        for bubble in &mut self.bubbles {
            if bubble.update(rng, &self.bubble_settings) {
                summary.recycled_bubbles += 1;
            }
            scene.set_position(bubble.mesh(), bubble.position());
        }

        let bounds = world.model_bounds();
        for cube in &mut self.cubes {
            let step = cube.update(bounds, &self.cube_settings);
            summary.cube_collisions += usize::from(step.collided);
            summary.cube_containments += usize::from(step.contained);
            scene.set_position(cube.mesh(), cube.position);
        }

        log::trace!("Procedural tick: {:?}", summary);
        summary
    }

    /// All bubbles
    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// All cubes
    pub fn cubes(&self) -> &[DriftCube] {
        &self.cubes
    }

    /// Mutable access to the cubes
    pub fn cubes_mut(&mut self) -> &mut [DriftCube] {
        &mut self.cubes
    }
}
