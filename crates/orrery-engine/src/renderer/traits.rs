//! Renderer seam.
//!
//! The engine never rasterizes. Each frame it hands a `FrameData` snapshot to
//! a `Renderer`, which on the web packs it into the wire buffer and calls the
//! host's draw callback. Tests plug in a recording renderer instead.

use glam::Vec3;
use serde::Serialize;

use super::instance::{CameraInstance, NodeInstance};
use crate::api::types::NodeId;
use crate::systems::director::Phase;

/// Size of the drawing surface in CSS pixels plus the device pixel ratio
/// the renderer should use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32, pixel_ratio: f32) -> Self {
        Self { width, height, pixel_ratio }
    }

    /// Width / height, or `None` for a collapsed surface.
    pub fn aspect(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }

    /// Device pixel ratio capped at `max`.
    pub fn capped(mut self, max: f32) -> Self {
        self.pixel_ratio = self.pixel_ratio.min(max).max(1.0e-3);
        self
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0, 1.0)
    }
}

/// Renderer backend contract.
pub trait Renderer {
    /// Backend identifier (e.g., "host", "recording").
    fn backend(&self) -> &'static str;

    /// Draw one complete frame of the scene from the current camera.
    fn draw(&mut self, frame: &FrameData);

    /// Handle a surface resize (CSS pixels).
    fn resize(&mut self, width: u32, height: u32);
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameData<'a> {
    /// Frames drawn so far, this one included.
    pub frame: u64,
    /// Seconds since the first frame.
    pub elapsed: f32,
    pub phase: Phase,
    /// Active scroll segment, `None` during the intro.
    pub segment: Option<usize>,
    pub camera: CameraInstance,
    /// One entry per scene node, in arena order.
    pub instances: &'a [NodeInstance],
    /// Live dust particle positions (local to the dust node).
    pub dust: &'a [Vec3],
    pub dust_node: NodeId,
    pub viewport: Viewport,
}

/// Renderer that keeps a summary of every frame it was handed.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub draws: Vec<RecordedFrame>,
    pub resizes: Vec<(u32, u32)>,
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct RecordedFrame {
    pub frame: u64,
    pub elapsed: f32,
    pub phase: Phase,
    pub segment: Option<usize>,
    pub camera: CameraInstance,
    pub node_count: usize,
    pub dust_count: usize,
}

#[cfg(test)]
impl RecordingRenderer {
    pub fn last(&self) -> Option<&RecordedFrame> {
        self.draws.last()
    }
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn backend(&self) -> &'static str {
        "recording"
    }

    fn draw(&mut self, frame: &FrameData) {
        self.draws.push(RecordedFrame {
            frame: frame.frame,
            elapsed: frame.elapsed,
            phase: frame.phase,
            segment: frame.segment,
            camera: frame.camera,
            node_count: frame.instances.len(),
            dust_count: frame.dust.len(),
        });
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.resizes.push((width, height));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_aspect() {
        assert_eq!(Viewport::new(800.0, 400.0, 1.0).aspect(), Some(2.0));
        assert_eq!(Viewport::new(800.0, 0.0, 1.0).aspect(), None);
    }

    #[test]
    fn pixel_ratio_is_capped() {
        assert_eq!(Viewport::new(1.0, 1.0, 3.0).capped(2.0).pixel_ratio, 2.0);
        assert_eq!(Viewport::new(1.0, 1.0, 1.5).capped(2.0).pixel_ratio, 1.5);
    }

    #[test]
    fn recording_renderer_counts_draws() {
        let mut renderer = RecordingRenderer::default();
        let instances = [NodeInstance::default(); 3];
        let dust = [Vec3::ZERO; 2];
        renderer.draw(&FrameData {
            frame: 1,
            elapsed: 0.0,
            phase: Phase::Intro,
            segment: None,
            camera: CameraInstance::default(),
            instances: &instances,
            dust: &dust,
            dust_node: NodeId(0),
            viewport: Viewport::default(),
        });
        renderer.resize(640, 480);
        assert_eq!(renderer.backend(), "recording");
        assert_eq!(renderer.draws.len(), 1);
        assert_eq!(renderer.last().map(|f| f.node_count), Some(3));
        assert_eq!(renderer.resizes, vec![(640, 480)]);
    }
}
