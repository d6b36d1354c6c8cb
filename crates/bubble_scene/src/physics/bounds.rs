//! Bounding volumes used for coarse collision tests

use crate::foundation::math::Vec3;

/// Axis-Aligned Bounding Box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vec3,
    /// Maximum corner of the bounding box
    pub max: Vec3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given extents
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Create the axis-aligned cube of edge `size` centered at `center`
    pub fn cube(center: Vec3, size: f32) -> Self {
        let half = size * 0.5;
        Self::from_center_extents(center, Vec3::new(half, half, half))
    }

    /// Smallest AABB enclosing all points, or `None` for an empty set
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec3>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        let (min, max) = points.fold((first, first), |(min, max), p| {
            (min.inf(&p), max.sup(&p))
        });
        Some(Self { min, max })
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Full edge lengths of the AABB
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if this AABB intersects another AABB (touching counts)
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Copy of this box moved by `offset`
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }
}

/// A bounding sphere for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// The center position of the sphere in world space
    pub center: Vec3,
    /// The radius of the sphere
    pub radius: f32,
}

impl BoundingSphere {
    /// Sphere through the corners of a box
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self {
            center: aabb.center(),
            radius: aabb.size().magnitude() * 0.5,
        }
    }
}

/// Bounding data published once the model has loaded and been placed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelBounds {
    /// World-space box of the placed model
    pub aabb: Aabb,
    /// Sphere enclosing `aabb`
    pub sphere: BoundingSphere,
}

impl ModelBounds {
    /// Derive both volumes from a world-space box
    pub fn from_aabb(aabb: Aabb) -> Self {
        Self {
            aabb,
            sphere: BoundingSphere::from_aabb(&aabb),
        }
    }

    /// Center of the model box
    pub fn center(&self) -> Vec3 {
        self.aabb.center()
    }

    /// Radius of the enclosing sphere
    pub fn radius(&self) -> f32 {
        self.sphere.radius
    }
}
