//! Scene application: startup, per-tick update and event handling

use std::path::Path;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::assets::{resolve_asset_path, AssetError, AssetLoader, LoadedModel, PendingLoad};
use crate::camera::{Camera, OrbitController, Viewport};
use crate::core::{ConfigError, SceneConfig};
use crate::foundation::collections::MeshHandle;
use crate::foundation::time::Timer;
use crate::procedural::{ProceduralObjects, TickSummary};
use crate::render::{RenderError, Renderer};
use crate::scene::{MeshShape, Scene, WorldContext};

/// Application-level errors
#[derive(Error, Debug)]
pub enum SceneError {
    /// Invalid or unreadable configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Model asset error
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Renderer error
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Events fed to the application by the host
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Display surface was resized
    Resized {
        /// New width in pixels
        width: u32,
        /// New height in pixels
        height: u32,
    },

    /// User dragged the view horizontally by this many radians
    RotateAzimuth(f32),

    /// Host asked the loop to stop
    CloseRequested,
}

/// The bubble scene and everything it needs to advance
pub struct SceneApp {
    config: SceneConfig,
    rng: StdRng,
    scene: Scene,
    world: WorldContext,
    objects: ProceduralObjects,
    camera: Camera,
    controls: OrbitController,
    viewport: Viewport,
    timer: Timer,
    pending_load: Option<PendingLoad>,
    model: Option<MeshHandle>,
    last_summary: TickSummary,
    running: bool,
}

impl SceneApp {
    /// Build the scene and begin loading the model
    ///
    /// Without a loader, or when the model cannot be found, the error is
    /// logged and the scene runs without a model. Only an invalid
    /// configuration fails startup.
    pub fn start(config: SceneConfig, loader: Option<Box<dyn AssetLoader>>) -> Result<Self, SceneError> {
        config.validate()?;
        log::info!("Starting bubble scene...");

        let mut rng = match config.engine.seed {
            Some(seed) => {
                log::info!("Using random seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let viewport = Viewport::new(config.camera.viewport_width, config.camera.viewport_height);
        let camera = Camera::from_settings(&config.camera, viewport.aspect_ratio());
        let controls = OrbitController::new(&config.camera);

        let mut scene = Scene::new();
        let world = WorldContext::new();
        let objects = ProceduralObjects::spawn(&mut rng, &config.bubbles, &config.cubes, &world, &mut scene);

        let mut app = Self {
            config,
            rng,
            scene,
            world,
            objects,
            camera,
            controls,
            viewport,
            timer: Timer::new(),
            pending_load: None,
            model: None,
            last_summary: TickSummary::default(),
            running: true,
        };

        app.pending_load = match loader {
            Some(loader) => app.begin_load(loader),
            None => {
                log::error!("No model loader available, running without a model");
                None
            }
        };

        Ok(app)
    }

    fn begin_load(&self, loader: Box<dyn AssetLoader>) -> Option<PendingLoad> {
        let assets = &self.config.assets;
        let started = resolve_asset_path(&assets.model_path, &assets.search_paths)
            .and_then(|path| PendingLoad::spawn(loader, path));

        match started {
            Ok(pending) => Some(pending),
            Err(e) => {
                log::error!("Failed to start model load: {}", e);
                None
            }
        }
    }

    /// Advance the scene by one frame and render it
    ///
    /// Order: apply a completed load, update the orbit controller, advance
    /// the procedural objects, render.
    pub fn tick(&mut self, delta_time: f32, renderer: &mut dyn Renderer) -> Result<TickSummary, SceneError> {
        self.poll_load();

        self.controls.update(&mut self.camera);

        let summary = self.objects.advance(&mut self.rng, &self.world, &mut self.scene);
        self.last_summary = summary;

        renderer.render(&self.scene, &self.camera)?;

        self.timer.advance(delta_time);
        Ok(summary)
    }

    fn poll_load(&mut self) {
        let Some(pending) = self.pending_load.as_mut() else {
            return;
        };
        let Some(result) = pending.poll() else {
            return;
        };
        let path = pending.path().to_path_buf();
        self.pending_load = None;
        self.finish_load(result, &path);
    }

    fn finish_load(&mut self, result: Result<LoadedModel, AssetError>, path: &Path) {
        match result {
            Ok(model) => self.apply_model(&model, path),
            Err(e) => log::error!("Failed to load model {}: {}", path.display(), e),
        }
    }

    fn apply_model(&mut self, model: &LoadedModel, path: &Path) {
        let depth = self.config.assets.placement_depth;
        let offset = model.placement_offset(depth);
        let bounds = model.placed_bounds(depth);

        self.model = Some(self.scene.add(MeshShape::Model { bounds: model.bounds }, offset));
        self.world.publish_bounds(bounds);

        self.controls.set_target(self.config.camera.loaded_target);
        self.controls.update(&mut self.camera);

        log::info!(
            "Model {} loaded ({} vertices), placed at {:?}",
            path.display(),
            model.vertex_count,
            offset
        );
    }

    /// Handle a host event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Resized { width, height } => {
                self.viewport.resize(width, height, &mut self.camera);
            }
            AppEvent::RotateAzimuth(angle) => {
                self.controls.rotate_azimuth(angle);
            }
            AppEvent::CloseRequested => {
                log::info!("Close requested");
                self.running = false;
            }
        }
    }

    /// Block until the model load finishes or `timeout` passes
    ///
    /// Call between ticks only. A finished load is applied right away, the
    /// same way the next tick would apply it. Returns `true` once no load is
    /// in flight.
    pub fn wait_for_load(&mut self, timeout: Duration) -> bool {
        let Some(pending) = self.pending_load.as_mut() else {
            return true;
        };
        let Some(result) = pending.wait(timeout) else {
            return false;
        };
        let path = pending.path().to_path_buf();
        self.pending_load = None;
        self.finish_load(result, &path);
        true
    }

    /// Whether the loop should keep running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether a model load is still in flight
    pub fn is_loading(&self) -> bool {
        self.pending_load.is_some()
    }

    /// Configuration the scene was started with
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Scene graph
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// World context
    pub fn world(&self) -> &WorldContext {
        &self.world
    }

    /// Bubbles and cubes
    pub fn objects(&self) -> &ProceduralObjects {
        &self.objects
    }

    /// Mutable access to the bubbles and cubes
    pub fn objects_mut(&mut self) -> &mut ProceduralObjects {
        &mut self.objects
    }

    /// Scene camera
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Orbit controller
    pub fn controls(&self) -> &OrbitController {
        &self.controls
    }

    /// Display viewport
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Frame timer
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Handle of the model node once loaded
    pub fn model(&self) -> Option<MeshHandle> {
        self.model
    }

    /// Counters from the most recent tick
    pub fn last_summary(&self) -> TickSummary {
        self.last_summary
    }
}
