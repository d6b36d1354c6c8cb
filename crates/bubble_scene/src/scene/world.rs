//! World context threaded through every tick

use crate::physics::ModelBounds;

/// State shared between the load-completion path and the tick
///
/// The model bounds start out absent and are published at most once. Readers
/// treat `None` as "no model yet" and skip model collision.
#[derive(Debug, Default, Clone)]
pub struct WorldContext {
    model_bounds: Option<ModelBounds>,
}

impl WorldContext {
    /// Create a context with no model bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Current model bounds, if the model has loaded
    pub fn model_bounds(&self) -> Option<&ModelBounds> {
        self.model_bounds.as_ref()
    }

    /// Publish the model bounds
    ///
    /// Returns `false` and keeps the existing value if bounds were already
    /// published.
    pub fn publish_bounds(&mut self, bounds: ModelBounds) -> bool {
        if self.model_bounds.is_some() {
            log::warn!("Model bounds already published, ignoring {:?}", bounds.aabb);
            return false;
        }
        log::info!(
            "Model bounds published: center {:?}, radius {:.3}",
            bounds.center(),
            bounds.radius()
        );
        self.model_bounds = Some(bounds);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use crate::physics::Aabb;

    #[test]
    fn test_bounds_published_once() {
        let mut world = WorldContext::new();
        assert!(world.model_bounds().is_none());

        let first = ModelBounds::from_aabb(Aabb::new(Vec3::zeros(), Vec3::new(1.0, 1.0, 1.0)));
        let second = ModelBounds::from_aabb(Aabb::new(Vec3::zeros(), Vec3::new(2.0, 2.0, 2.0)));

        assert!(world.publish_bounds(first));
        assert!(!world.publish_bounds(second));
        assert_eq!(world.model_bounds(), Some(&first));
    }
}
