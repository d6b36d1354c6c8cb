//! Math utilities and types
//!
//! Provides the vector and matrix aliases used by the scene, plus the
//! spherical-coordinate helpers the procedural placement is built on.

pub use nalgebra::{
    Vector3,
    Vector4,
    Matrix4,
};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Homogeneous 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Transform representing position and scale of a scene node
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Position in 3D space
    pub position: Vec3,

    /// Scale factors
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Transform {
    /// Create a transform with only position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Convert to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&self.position) * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec3};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Wrap an angle into `[0, 2π)`
    pub fn wrap_angle(angle: f32) -> f32 {
        let wrapped = angle.rem_euclid(constants::TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if wrapped >= constants::TAU { 0.0 } else { wrapped }
    }

    /// Convert spherical coordinates to Cartesian, Y-up
    ///
    /// `theta` is the azimuth in the XZ plane, `phi` the polar angle from +Y.
    pub fn spherical_to_cartesian(theta: f32, phi: f32, radius: f32) -> Vec3 {
        Vec3::new(
            phi.sin() * theta.cos() * radius,
            phi.cos() * radius,
            phi.sin() * theta.sin() * radius,
        )
    }

    /// Normalize a vector, returning `None` when its length is too small to trust
    pub fn try_normalize(v: Vec3) -> Option<Vec3> {
        v.try_normalize(f32::EPSILON)
    }
}
