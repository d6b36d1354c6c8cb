//! Coarse contact detection against the model bounds and the reflection response
//!
//! The contact normal is approximated by the direction from the model centre
//! to the colliding body, which is good enough for small decorative objects
//! bouncing off a roughly convex model.

use crate::foundation::math::{utils, Vec3};
use super::bounds::{Aabb, ModelBounds};

/// A detected contact with the model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the model centre towards the body
    pub normal: Vec3,
}

/// Unit vector from `center` to `point`, or `None` when the two coincide
pub fn approximate_normal(point: Vec3, center: Vec3) -> Option<Vec3> {
    utils::try_normalize(point - center)
}

/// Reflect the inward component of `velocity` about `normal`
///
/// Velocities already moving away from the surface (non-negative dot
/// product) are returned unchanged. `normal` must be unit length.
pub fn reflect_inward(velocity: Vec3, normal: &Vec3) -> Vec3 {
    let dot = velocity.dot(normal);
    if dot < 0.0 {
        velocity - normal * (2.0 * dot)
    } else {
        velocity
    }
}

/// Test a body box against the model box
///
/// Returns `None` when the boxes are apart, and also when the body sits
/// exactly on the model centre so that no normal can be derived.
pub fn detect_contact(body: &Aabb, body_position: Vec3, model: &ModelBounds) -> Option<Contact> {
    if !body.intersects(&model.aabb) {
        return None;
    }

    match approximate_normal(body_position, model.center()) {
        Some(normal) => Some(Contact { normal }),
        None => {
            log::trace!("Body at model centre {:?}, skipping contact response", body_position);
            None
        }
    }
}
