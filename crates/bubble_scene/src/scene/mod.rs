//! Scene management
//!
//! A headless stand-in for the renderer's scene graph plus the world context
//! threaded through every tick.
//!
//! ## Architecture
//!
//! ```text
//! Procedural objects (simulation state)
//!      ↓ MeshHandle
//! Scene (node shapes and transforms)
//!      ↓
//! Renderer
//! ```

mod scene_graph;
mod world;

pub use scene_graph::{Scene, SceneNode, MeshShape};
pub use world::WorldContext;
pub use crate::foundation::collections::MeshHandle;
