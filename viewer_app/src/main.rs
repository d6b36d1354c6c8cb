//! Headless bubble scene viewer
//!
//! Usage: `bubble_viewer [config.toml|config.ron]`
//!
//! Runs the scene with the OBJ model loader and a headless renderer until
//! `engine.max_frames` is reached or the process is interrupted. `RUST_LOG`
//! overrides the configured log level.

use bubble_scene::prelude::*;

/// Initial horizontal spin so the orbit controller has something to damp
const INTRO_SPIN: f32 = std::f32::consts::FRAC_PI_4;

fn load_config() -> Result<SceneConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => SceneConfig::load_from_file(&path),
        None => Ok(SceneConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook for better error reporting
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC occurred: {:?}", panic_info);
    }));

    let config = load_config()?;

    // Initialize logging
    logging::init_with_level(&config.engine.log_level);

    log::info!(
        "Bubble viewer: {} bubbles, {} cubes, model {}",
        config.bubbles.count,
        config.cubes.count,
        config.assets.model_path
    );

    let mut app = SceneApp::start(config.clone(), Some(Box::new(ObjModelLoader::new())))?;
    app.handle_event(AppEvent::RotateAzimuth(INTRO_SPIN));

    let mut renderer = HeadlessRenderer::new();
    let frames = FrameLoop::new(&config.engine).run(&mut app, &mut renderer)?;

    log::info!(
        "Rendered {} frames, average {:.1} fps, model loaded: {}",
        frames,
        app.timer().average_fps(),
        app.world().model_bounds().is_some()
    );
    Ok(())
}
