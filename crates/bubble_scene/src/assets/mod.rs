//! # Asset Loading
//!
//! One model is loaded per run, off the frame loop. The scene only needs
//! the model's bounds; the mesh data itself belongs to the renderer.
//!
//! ## Flow
//!
//! ```text
//! resolve_asset_path ─► PendingLoad::spawn ─► (loader thread) AssetLoader::load
//!                                                   │
//! frame loop: PendingLoad::poll ◄───────────────────┘
//! ```

pub mod loader;
#[cfg(feature = "obj")]
pub mod obj_loader;

pub use loader::{resolve_asset_path, AssetError, AssetLoader, LoadedModel, PendingLoad};
#[cfg(feature = "obj")]
pub use obj_loader::ObjModelLoader;
