//! Frame buffer layout shared with the host page.
//! Must stay in sync with `web/host.js`.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 16 floats]
//! [Camera: 16 floats]
//! [Nodes:  node_count × 20 floats]
//! [Dust:   dust_count × 3 floats]
//! ```
//!
//! Counts are written into the header every frame; the host reads them
//! back to compute offsets.

use crate::renderer::instance::{CameraInstance, NodeInstance};
use crate::renderer::traits::FrameData;
use crate::systems::director::Phase;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_ELAPSED: usize = 2;
pub const HEADER_NODE_COUNT: usize = 3;
pub const HEADER_DUST_COUNT: usize = 4;
pub const HEADER_SEGMENT: usize = 5;
pub const HEADER_PHASE: usize = 6;
pub const HEADER_VIEWPORT_WIDTH: usize = 7;
pub const HEADER_VIEWPORT_HEIGHT: usize = 8;
pub const HEADER_PIXEL_RATIO: usize = 9;
pub const HEADER_SURFACE_GENERATION: usize = 10;
pub const HEADER_DUST_NODE: usize = 11;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera block (wire format, never changes).
pub const CAMERA_FLOATS: usize = CameraInstance::FLOATS;

/// Floats per node: world matrix ×16, opacity, visible, pad ×2.
pub const NODE_FLOATS: usize = NodeInstance::FLOATS;

/// Floats per dust particle: x, y, z.
pub const DUST_FLOATS: usize = 3;

/// Segment value written while the intro is still running.
pub const SEGMENT_NONE: f32 = -1.0;

/// Buffer layout for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolLayout {
    pub node_count: usize,
    pub dust_count: usize,

    /// Offset (in floats) where the camera block begins.
    pub camera_offset: usize,
    /// Offset (in floats) where node data begins.
    pub node_data_offset: usize,
    /// Offset (in floats) where dust data begins.
    pub dust_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(node_count: usize, dust_count: usize) -> Self {
        let camera_offset = HEADER_FLOATS;
        let node_data_offset = camera_offset + CAMERA_FLOATS;
        let dust_data_offset = node_data_offset + node_count * NODE_FLOATS;
        let buffer_total_floats = dust_data_offset + dust_count * DUST_FLOATS;

        Self {
            node_count,
            dust_count,
            camera_offset,
            node_data_offset,
            dust_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }
}

/// Wire code for the camera phase.
pub fn phase_code(phase: Phase) -> f32 {
    match phase {
        Phase::Intro => 0.0,
        Phase::Scroll => 1.0,
    }
}

/// Serialize a frame into `out`, replacing its contents. The vector's
/// allocation is reused, so steady-state packing does not allocate.
pub fn pack_frame(frame: &FrameData, surface_generation: u32, out: &mut Vec<f32>) -> ProtocolLayout {
    let layout = ProtocolLayout::new(frame.instances.len(), frame.dust.len());
    out.clear();
    out.reserve(layout.buffer_total_floats);

    let mut header = [0.0f32; HEADER_FLOATS];
    header[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    header[HEADER_FRAME_COUNTER] = frame.frame as f32;
    header[HEADER_ELAPSED] = frame.elapsed;
    header[HEADER_NODE_COUNT] = layout.node_count as f32;
    header[HEADER_DUST_COUNT] = layout.dust_count as f32;
    header[HEADER_SEGMENT] = frame.segment.map_or(SEGMENT_NONE, |s| s as f32);
    header[HEADER_PHASE] = phase_code(frame.phase);
    header[HEADER_VIEWPORT_WIDTH] = frame.viewport.width;
    header[HEADER_VIEWPORT_HEIGHT] = frame.viewport.height;
    header[HEADER_PIXEL_RATIO] = frame.viewport.pixel_ratio;
    header[HEADER_SURFACE_GENERATION] = surface_generation as f32;
    header[HEADER_DUST_NODE] = frame.dust_node.index() as f32;

    out.extend_from_slice(&header);
    out.extend_from_slice(bytemuck::cast_slice::<CameraInstance, f32>(std::slice::from_ref(&frame.camera)));
    out.extend_from_slice(bytemuck::cast_slice::<NodeInstance, f32>(frame.instances));
    out.extend_from_slice(bytemuck::cast_slice::<glam::Vec3, f32>(frame.dust));

    debug_assert_eq!(out.len(), layout.buffer_total_floats);
    layout
}
