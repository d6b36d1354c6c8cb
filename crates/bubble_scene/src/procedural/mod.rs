//! Procedural decoration: floating bubbles and drifting cubes
//!
//! Objects are spawned once with a caller-supplied random source and then
//! advanced one tick at a time. Bubbles and cubes share no state, so the
//! two collections can be advanced in either order.

pub mod bubble;
pub mod drift_cube;
pub mod placement;
mod object_set;

pub use bubble::{Bubble, BubbleSeed};
pub use drift_cube::{DriftCube, CubeStep};
pub use object_set::{ProceduralObjects, TickSummary};
