//! Physics module for coarse collision detection and response
//!
//! The scene only needs box-vs-box overlap tests and a single reflection
//! response, so everything here works on axis-aligned boxes and the
//! bounding sphere derived from them.

pub mod bounds;
pub mod collision;

pub use bounds::{Aabb, BoundingSphere, ModelBounds};
pub use collision::{approximate_normal, detect_contact, reflect_inward, Contact};
