//! # Scene Configuration
//!
//! All tunables of the bubble scene in one place: frame pacing and logging,
//! camera and orbit limits, bubble and drift-cube motion constants, and the
//! model asset location.
//!
//! ## Configuration Categories
//!
//! - **Engine**: Log level, target frame rate, RNG seed, frame limit
//! - **Camera**: Projection, locked orbit distance and polar angle, damping
//! - **Bubbles**: Shell placement, ascent and orbit rates, recycle band
//! - **Cubes**: Exclusion shell, drift velocity, collision push-out, containment
//! - **Assets**: Model path, search paths, placement depth
//!
//! Every section deserializes with `#[serde(default)]`, so a config file only
//! needs to name the values it changes.

use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::{constants, Vec3};

/// Half-open sampling interval `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    /// Inclusive lower bound
    pub min: f32,
    /// Exclusive upper bound
    pub max: f32,
}

impl SampleRange {
    /// Create a new range
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Width of the range
    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Draw a uniform sample from the range
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.gen::<f32>() * self.span()
    }

    fn validate(&self, name: &str) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() || self.max < self.min {
            return Err(ConfigError::Invalid(format!(
                "{name} range is inverted or non-finite: [{}, {})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// # Engine Settings
///
/// Frame loop behavior and logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Target ticks per second for the frame loop
    pub target_fps: u32,
    /// Seed for the procedural random source (entropy when unset)
    pub seed: Option<u64>,
    /// Stop after this many frames (run until interrupted when unset)
    pub max_frames: Option<u64>,
    /// Log frame statistics every this many frames (0 disables)
    pub stats_interval_frames: u64,
}

impl EngineSettings {
    /// Create engine settings with defaults
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            target_fps: 60,
            seed: None,
            max_frames: None,
            stats_interval_frames: 300,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// # Camera Settings
///
/// Perspective projection plus the orbit limits. The distance and polar
/// angle are each a single value: the orbit only spins horizontally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
    /// Initial eye position
    pub position: Vec3,
    /// Initial orbit target
    pub target: Vec3,
    /// Orbit target once the model has loaded
    pub loaded_target: Vec3,
    /// Locked orbit distance
    pub distance: f32,
    /// Locked polar angle in radians, measured from +Y
    pub polar_angle: f32,
    /// Fraction of pending rotation applied per update
    pub damping: f32,
    /// Initial viewport width in pixels
    pub viewport_width: u32,
    /// Initial viewport height in pixels
    pub viewport_height: u32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 8.0, 8.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            loaded_target: Vec3::zeros(),
            distance: 8.0,
            polar_angle: constants::HALF_PI,
            damping: 0.1,
            viewport_width: 1280,
            viewport_height: 720,
        }
    }
}

/// # Bubble Settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleSettings {
    /// Number of bubbles created at startup
    pub count: usize,
    /// Shell radius range
    pub radius: SampleRange,
    /// Per-bubble speed multiplier range
    pub speed: SampleRange,
    /// Visual sphere radius range
    pub size: SampleRange,
    /// Vertical offset added at placement
    pub vertical_offset: f32,
    /// Forward z shift added at placement
    pub forward_offset: f32,
    /// Vertical rise per tick, scaled by speed
    pub rise_rate: f32,
    /// Azimuth advance per tick, scaled by speed
    pub orbit_rate: f32,
    /// Height above which a bubble is recycled
    pub ceiling: f32,
    /// Recycled bubbles restart in `[reset_base, reset_base + reset_span)`
    pub reset_base: f32,
    /// Width of the recycle band
    pub reset_span: f32,
}

impl Default for BubbleSettings {
    fn default() -> Self {
        Self {
            count: 80,
            radius: SampleRange::new(3.5, 6.0),
            speed: SampleRange::new(0.18, 0.56),
            size: SampleRange::new(1.0, 2.7),
            vertical_offset: 1.5,
            forward_offset: 2.5,
            rise_rate: 0.01,
            orbit_rate: 0.002,
            ceiling: 6.0,
            reset_base: 1.5,
            reset_span: 1.0,
        }
    }
}

/// # Drift Cube Settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeSettings {
    /// Number of cubes created at startup
    pub count: usize,
    /// Cube edge length range
    pub size: SampleRange,
    /// Model bounding radius assumed before the model has loaded
    pub default_model_radius: f32,
    /// Gap kept between the model bounding sphere and the cube shell
    pub clearance: f32,
    /// Radial depth of the placement shell
    pub shell_depth: f32,
    /// Samples closer than `inner radius + margin` are rejected
    pub acceptance_margin: f32,
    /// Vertical offset added at placement
    pub vertical_offset: f32,
    /// Velocity components are `(U[0,1) - 0.5) * velocity_scale`
    pub velocity_scale: f32,
    /// Distance a colliding cube is pushed out along the normal
    pub push_out: f32,
    /// Cubes beyond this distance from the origin are pulled back
    pub boundary_radius: f32,
    /// Position scale applied on containment
    pub pullback: f32,
    /// Cap on rejection-sampling attempts per cube
    pub max_placement_attempts: u32,
}

impl Default for CubeSettings {
    fn default() -> Self {
        Self {
            count: 120,
            size: SampleRange::new(0.08, 0.16),
            default_model_radius: 2.5,
            clearance: 0.5,
            shell_depth: 3.5,
            acceptance_margin: 0.1,
            vertical_offset: 1.5,
            velocity_scale: 0.04,
            push_out: 0.1,
            boundary_radius: 7.0,
            pullback: 0.95,
            max_placement_attempts: 64,
        }
    }
}

/// # Asset Settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Model file, relative to one of the search paths
    pub model_path: String,
    /// Directories searched for the model, in order
    pub search_paths: Vec<String>,
    /// Z position of the model centre after placement
    pub placement_depth: f32,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            model_path: "models/scene.obj".to_string(),
            search_paths: vec!["resources".to_string(), ".".to_string()],
            placement_depth: -6.5,
        }
    }
}

/// # Complete Scene Configuration
///
/// Top-level configuration that encompasses all subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Frame loop and logging
    pub engine: EngineSettings,
    /// Camera and orbit controller
    pub camera: CameraSettings,
    /// Floating bubbles
    pub bubbles: BubbleSettings,
    /// Drifting cubes
    pub cubes: CubeSettings,
    /// Model asset
    pub assets: AssetSettings,
}

impl SceneConfig {
    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.engine.seed = Some(seed);
        self
    }

    /// Limit the number of frames the loop runs
    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.engine.max_frames = Some(frames);
        self
    }

    /// Set the procedural object counts
    pub fn with_counts(mut self, bubbles: usize, cubes: usize) -> Self {
        self.bubbles.count = bubbles;
        self.cubes.count = cubes;
        self
    }

    /// Set the model path
    pub fn with_model_path(mut self, path: impl Into<String>) -> Self {
        self.assets.model_path = path.into();
        self
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engine.target_fps == 0 {
            return Err(ConfigError::Invalid("target_fps must be at least 1".to_string()));
        }

        let camera = &self.camera;
        if camera.distance <= 0.0 {
            return Err(ConfigError::Invalid("camera distance must be positive".to_string()));
        }
        if !(camera.damping > 0.0 && camera.damping <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "camera damping must be in (0, 1], got {}",
                camera.damping
            )));
        }
        if camera.near <= 0.0 || camera.far <= camera.near {
            return Err(ConfigError::Invalid("camera clip planes must satisfy 0 < near < far".to_string()));
        }

        let bubbles = &self.bubbles;
        if bubbles.count == 0 {
            return Err(ConfigError::Invalid("bubble count must be at least 1".to_string()));
        }
        bubbles.radius.validate("bubble radius")?;
        if !(bubbles.radius.min > 0.0) {
            return Err(ConfigError::Invalid("bubble radius must be positive".to_string()));
        }
        bubbles.speed.validate("bubble speed")?;
        bubbles.size.validate("bubble size")?;
        if bubbles.reset_base + bubbles.reset_span > bubbles.ceiling {
            return Err(ConfigError::Invalid(
                "bubble recycle band must lie below the ceiling".to_string(),
            ));
        }

        let cubes = &self.cubes;
        if cubes.count == 0 {
            return Err(ConfigError::Invalid("cube count must be at least 1".to_string()));
        }
        cubes.size.validate("cube size")?;
        if !(cubes.size.min > 0.0) {
            return Err(ConfigError::Invalid("cube size must be positive".to_string()));
        }
        if !(cubes.default_model_radius >= 0.0) {
            return Err(ConfigError::Invalid("default model radius must be non-negative".to_string()));
        }
        if !(cubes.shell_depth > 0.0) {
            return Err(ConfigError::Invalid("cube shell depth must be positive".to_string()));
        }
        if !(cubes.boundary_radius > 0.0) || !cubes.boundary_radius.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "cube boundary radius must be positive and finite, got {}",
                cubes.boundary_radius
            )));
        }
        if !(cubes.velocity_scale >= 0.0) {
            return Err(ConfigError::Invalid("cube velocity scale must be non-negative".to_string()));
        }
        if !(cubes.pullback > 0.0 && cubes.pullback < 1.0) {
            return Err(ConfigError::Invalid("cube pullback must be in (0, 1)".to_string()));
        }
        if cubes.max_placement_attempts == 0 {
            return Err(ConfigError::Invalid("max_placement_attempts must be at least 1".to_string()));
        }

        if self.assets.model_path.is_empty() {
            return Err(ConfigError::Invalid("model path cannot be empty".to_string()));
        }

        Ok(())
    }
}

impl Config for SceneConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_defaults_validate() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_sample_range_stays_half_open() {
        let range = SampleRange::new(0.18, 0.56);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value = range.sample(&mut rng);
            assert!((0.18..0.56).contains(&value));
        }
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut config = SceneConfig::default();
        config.bubbles.radius = SampleRange::new(6.0, 3.5);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_damping_bounds() {
        let mut config = SceneConfig::default();
        config.camera.damping = 0.0;
        assert!(config.validate().is_err());
        config.camera.damping = 1.0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_counts_rejected() {
        let config = SceneConfig::default().with_counts(0, 10);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = SceneConfig::default().with_counts(10, 0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_negative_bubble_radius_rejected() {
        let mut config = SceneConfig::default();
        config.bubbles.radius = SampleRange::new(-2.0, -1.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.bubbles.radius = SampleRange::new(0.0, 1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_shell_depth_must_be_positive() {
        let mut config = SceneConfig::default();
        config.cubes.shell_depth = 0.0;
        assert!(config.validate().is_err());

        config.cubes.shell_depth = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_boundary_radius_must_be_finite_and_positive() {
        let mut config = SceneConfig::default();
        for radius in [f32::NAN, f32::INFINITY, 0.0, -7.0] {
            config.cubes.boundary_radius = radius;
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid(_))),
                "boundary radius {radius} accepted"
            );
        }
    }

    #[test]
    fn test_velocity_scale_must_be_non_negative() {
        let mut config = SceneConfig::default();
        config.cubes.velocity_scale = 0.0;
        assert!(config.validate().is_ok());

        config.cubes.velocity_scale = -0.04;
        assert!(config.validate().is_err());

        config.cubes.velocity_scale = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_placement_attempts_rejected() {
        let mut config = SceneConfig::default();
        config.cubes.max_placement_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let text = r#"
            [engine]
            seed = 42

            [cubes]
            count = 10
        "#;
        let config = SceneConfig::from_str_with_format(text, "scene.toml").unwrap();
        assert_eq!(config.engine.seed, Some(42));
        assert_eq!(config.cubes.count, 10);
        assert_eq!(config.bubbles.count, 80);
        assert_eq!(config.cubes.boundary_radius, 7.0);
    }

    #[test]
    fn test_ron_round_trip_through_text() {
        let config = SceneConfig::default().with_seed(9).with_counts(3, 4);
        let text = ron::ser::to_string(&config).unwrap();
        let parsed = SceneConfig::from_str_with_format(&text, "scene.ron").unwrap();
        assert_eq!(parsed.engine.seed, Some(9));
        assert_eq!(parsed.bubbles.count, 3);
        assert_eq!(parsed.cubes.count, 4);
    }

    fn temp_config_path(name: &str) -> String {
        let dir = std::env::temp_dir().join("bubble_scene_config_tests");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name).display().to_string()
    }

    #[test]
    fn test_toml_file_round_trip() {
        let path = temp_config_path("scene.toml");
        let config = SceneConfig::default()
            .with_seed(17)
            .with_max_frames(120)
            .with_model_path("models/ship.obj");

        config.save_to_file(&path).unwrap();
        let loaded = SceneConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded.engine.seed, Some(17));
        assert_eq!(loaded.engine.max_frames, Some(120));
        assert_eq!(loaded.assets.model_path, "models/ship.obj");
        assert_eq!(loaded.camera.position, config.camera.position);
        assert_eq!(loaded.cubes.size, config.cubes.size);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_ron_file_round_trip() {
        let path = temp_config_path("scene.ron");
        let mut config = SceneConfig::default().with_counts(12, 34);
        config.camera.damping = 0.25;

        config.save_to_file(&path).unwrap();
        let loaded = SceneConfig::load_from_file(&path).unwrap();

        assert_eq!(loaded.bubbles.count, 12);
        assert_eq!(loaded.cubes.count, 34);
        assert_eq!(loaded.camera.damping, 0.25);
        assert_eq!(loaded.engine.seed, None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_config_path("does_not_exist.toml");
        let _ = std::fs::remove_file(&path);
        assert!(matches!(SceneConfig::load_from_file(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let path = temp_config_path("scene.json");
        let result = SceneConfig::default().save_to_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = SceneConfig::from_str_with_format("", "scene.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
