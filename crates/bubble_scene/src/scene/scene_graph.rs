//! Scene graph storage
//!
//! Nodes are kept in a slot map so the procedural objects can hold stable
//! [`MeshHandle`]s and write their positions back every tick.

use crate::foundation::collections::{HandleMap, MeshHandle};
use crate::foundation::math::{Transform, Vec3};
use crate::physics::Aabb;

/// Geometry of a scene node
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshShape {
    /// Sphere with the given radius
    Sphere {
        /// Sphere radius
        radius: f32,
    },
    /// Axis-aligned cube with the given edge length
    Cube {
        /// Edge length
        size: f32,
    },
    /// Loaded model, described by its model-space bounds
    Model {
        /// Model-space bounding box
        bounds: Aabb,
    },
}

/// A renderable node
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Node geometry
    pub shape: MeshShape,
    /// World transform
    pub transform: Transform,
}

/// Collection of renderable nodes
#[derive(Default)]
pub struct Scene {
    nodes: HandleMap<SceneNode>,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node at `position` and return its handle
    pub fn add(&mut self, shape: MeshShape, position: Vec3) -> MeshHandle {
        self.nodes.insert(SceneNode {
            shape,
            transform: Transform::from_position(position),
        })
    }

    /// Move a node; returns `false` for a stale handle
    pub fn set_position(&mut self, handle: MeshHandle, position: Vec3) -> bool {
        match self.nodes.get_mut(handle) {
            Some(node) => {
                node.transform.position = position;
                true
            }
            None => false,
        }
    }

    /// Look up a node
    pub fn node(&self, handle: MeshHandle) -> Option<&SceneNode> {
        self.nodes.get(handle)
    }

    /// World position of a node
    pub fn position(&self, handle: MeshHandle) -> Option<Vec3> {
        self.node(handle).map(|node| node.transform.position)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes
    pub fn iter(&self) -> impl Iterator<Item = (MeshHandle, &SceneNode)> {
        self.nodes.iter()
    }

    /// Whether a model node has been added
    pub fn has_model(&self) -> bool {
        self.nodes
            .values()
            .any(|node| matches!(node.shape, MeshShape::Model { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_move_node() {
        let mut scene = Scene::new();
        let handle = scene.add(MeshShape::Cube { size: 0.1 }, Vec3::new(1.0, 2.0, 3.0));

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.position(handle), Some(Vec3::new(1.0, 2.0, 3.0)));

        assert!(scene.set_position(handle, Vec3::zeros()));
        assert_eq!(scene.position(handle), Some(Vec3::zeros()));
        assert!(!scene.has_model());
    }

    #[test]
    fn test_stale_handle_rejected() {
        let mut scene = Scene::new();
        scene.add(MeshShape::Sphere { radius: 1.0 }, Vec3::zeros());

        // The default key is the null key and never refers to a node
        assert!(!scene.set_position(MeshHandle::default(), Vec3::zeros()));
        assert!(scene.position(MeshHandle::default()).is_none());
    }
}
