//! Renderer that draws nothing and remembers what it was asked to draw

use crate::camera::Camera;
use crate::foundation::math::{Mat4, Vec3, Vec4};
use crate::scene::Scene;
use super::{RenderError, Renderer};

/// Counts frames and records the last camera and scene size
#[derive(Debug, Default, Clone)]
pub struct HeadlessRenderer {
    frames: u64,
    last_eye: Option<Vec3>,
    last_target: Option<Vec3>,
    last_node_count: usize,
    last_visible_count: usize,
    last_view_projection: Option<Mat4>,
    fail_at_frame: Option<u64>,
}

impl HeadlessRenderer {
    /// Create a renderer with no frames submitted
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer whose backend reports a failure on the given zero-based frame
    pub fn failing_at(frame: u64) -> Self {
        Self {
            fail_at_frame: Some(frame),
            ..Self::default()
        }
    }

    /// Frames rendered successfully
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Camera position of the last rendered frame
    pub fn last_eye(&self) -> Option<Vec3> {
        self.last_eye
    }

    /// Camera target of the last rendered frame
    pub fn last_target(&self) -> Option<Vec3> {
        self.last_target
    }

    /// Scene node count of the last rendered frame
    pub fn last_node_count(&self) -> usize {
        self.last_node_count
    }

    /// Nodes whose origin fell inside the view frustum in the last frame
    pub fn last_visible_count(&self) -> usize {
        self.last_visible_count
    }

    /// Projection × view matrix of the last rendered frame
    pub fn last_view_projection(&self) -> Option<Mat4> {
        self.last_view_projection
    }
}

/// Whether a node origin lands inside the clip volume
fn origin_in_frustum(model_view_projection: &Mat4) -> bool {
    let clip = model_view_projection * Vec4::new(0.0, 0.0, 0.0, 1.0);
    clip.w > 0.0 && clip.x.abs() <= clip.w && clip.y.abs() <= clip.w && clip.z.abs() <= clip.w
}

impl Renderer for HeadlessRenderer {
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError> {
        if self.fail_at_frame == Some(self.frames) {
            return Err(RenderError::Backend(format!("headless failure at frame {}", self.frames)));
        }

        let view_projection = camera.view_projection_matrix();
        let visible = scene
            .iter()
            .filter(|(_, node)| origin_in_frustum(&(view_projection * node.transform.to_matrix())))
            .count();

        self.frames += 1;
        self.last_eye = Some(camera.position);
        self.last_target = Some(camera.target);
        self.last_node_count = scene.len();
        self.last_visible_count = visible;
        self.last_view_projection = Some(view_projection);
        log::trace!(
            "Headless frame {} with {} nodes ({} visible)",
            self.frames,
            self.last_node_count,
            self.last_visible_count
        );
        Ok(())
    }
}
