//! Camera, orbit controls and viewport

mod perspective;
mod orbit;
mod viewport;

pub use perspective::Camera;
pub use orbit::OrbitController;
pub use viewport::Viewport;
