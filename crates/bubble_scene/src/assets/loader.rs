//! Asynchronous single-shot model loading
//!
//! The actual file parsing is delegated to an [`AssetLoader`]. A
//! [`PendingLoad`] runs it on a background thread and hands the result back
//! through a channel that the frame loop polls at the start of a tick, so
//! completion is observed between ticks and never in the middle of one.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::foundation::math::Vec3;
use crate::physics::{Aabb, ModelBounds};

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found in any search path
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// The loader could not parse the file
    #[error("Failed to parse asset: {0}")]
    Parse(String),

    /// The model contains no vertex positions
    #[error("Model has no geometry: {0}")]
    EmptyGeometry(String),

    /// The background load ended without reporting a result
    #[error("Loader thread exited without a result")]
    LoaderDisconnected,

    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A model as far as the scene cares: its name and model-space bounds
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    /// Source path of the model
    pub name: String,
    /// Model-space bounding box
    pub bounds: Aabb,
    /// Number of vertex positions read
    pub vertex_count: usize,
}

impl LoadedModel {
    /// Build a model description from raw positions
    pub fn from_positions(name: impl Into<String>, positions: &[Vec3]) -> Result<Self, AssetError> {
        let name = name.into();
        let bounds = Aabb::from_points(positions.iter().copied())
            .ok_or_else(|| AssetError::EmptyGeometry(name.clone()))?;
        Ok(Self {
            name,
            bounds,
            vertex_count: positions.len(),
        })
    }

    /// Translation that centres the model on X/Y and puts its Z centre at `depth`
    pub fn placement_offset(&self, depth: f32) -> Vec3 {
        let center = self.bounds.center();
        Vec3::new(-center.x, -center.y, depth - center.z)
    }

    /// World bounds after applying [`placement_offset`](Self::placement_offset)
    pub fn placed_bounds(&self, depth: f32) -> ModelBounds {
        ModelBounds::from_aabb(self.bounds.translated(self.placement_offset(depth)))
    }
}

/// Parses one model file
///
/// Implementations are synchronous; [`PendingLoad`] moves them off the
/// frame loop.
pub trait AssetLoader: Send {
    /// Load the model at `path`
    fn load(&self, path: &Path) -> Result<LoadedModel, AssetError>;
}

/// Find `path` in the search paths, falling back to the path as given
pub fn resolve_asset_path(path: &str, search_paths: &[String]) -> Result<PathBuf, AssetError> {
    let found = search_paths
        .iter()
        .map(|dir| Path::new(dir).join(path))
        .find(|candidate| candidate.exists());

    let file_path = found.unwrap_or_else(|| PathBuf::from(path));
    if file_path.exists() {
        Ok(file_path)
    } else {
        Err(AssetError::NotFound(path.to_string()))
    }
}

/// An in-flight load that reports exactly once
pub struct PendingLoad {
    path: PathBuf,
    receiver: Receiver<Result<LoadedModel, AssetError>>,
    finished: bool,
}

impl PendingLoad {
    /// Start loading `path` on a background thread
    pub fn spawn(loader: Box<dyn AssetLoader>, path: PathBuf) -> Result<Self, AssetError> {
        let (sender, receiver) = mpsc::channel();
        let thread_path = path.clone();

        thread::Builder::new()
            .name("model-loader".to_string())
            .spawn(move || {
                let result = loader.load(&thread_path);
                // The scene may already be gone; nothing to report to then
                let _ = sender.send(result);
            })?;

        log::info!("Started loading model {}", path.display());
        Ok(Self {
            path,
            receiver,
            finished: false,
        })
    }

    /// Path being loaded
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the result has already been handed out
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Non-blocking check for the result
    ///
    /// Returns `Some` exactly once; later calls return `None`.
    pub fn poll(&mut self) -> Option<Result<LoadedModel, AssetError>> {
        if self.finished {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(result) => self.finish(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => self.finish(Err(AssetError::LoaderDisconnected)),
        }
    }

    /// Block for up to `timeout` waiting for the result
    pub fn wait(&mut self, timeout: Duration) -> Option<Result<LoadedModel, AssetError>> {
        if self.finished {
            return None;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(result) => self.finish(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => self.finish(Err(AssetError::LoaderDisconnected)),
        }
    }

    fn finish(&mut self, result: Result<LoadedModel, AssetError>) -> Option<Result<LoadedModel, AssetError>> {
        self.finished = true;
        Some(result)
    }
}
