//! Host renderer: packs each frame into the wire buffer and hands it to the
//! page's draw callback.

use orrery_engine::bridge::protocol::pack_frame;
use orrery_engine::{FrameData, Renderer};
use wasm_bindgen::JsValue;

use crate::error::describe;

/// Calls `on_draw(ptr, len)` once per frame, where `ptr`/`len` locate the
/// packed f32 frame buffer in wasm memory. The callback must not call back
/// into the show exports.
pub struct HostRenderer {
    on_draw: js_sys::Function,
    buffer: Vec<f32>,
    /// Bumped on every resize so the host can re-read the surface size.
    generation: u32,
}

impl HostRenderer {
    pub fn new(on_draw: js_sys::Function) -> Self {
        Self {
            on_draw,
            buffer: Vec::new(),
            generation: 0,
        }
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_len(&self) -> u32 {
        self.buffer.len() as u32
    }
}

impl Renderer for HostRenderer {
    fn backend(&self) -> &'static str {
        "host"
    }

    fn draw(&mut self, frame: &FrameData) {
        pack_frame(frame, self.generation, &mut self.buffer);
        let ptr = JsValue::from(self.buffer.as_ptr() as u32);
        let len = JsValue::from(self.buffer.len() as u32);
        if let Err(e) = self.on_draw.call2(&JsValue::NULL, &ptr, &len) {
            log::error!("host draw callback failed: {}", describe(&e));
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.generation = self.generation.wrapping_add(1);
        log::debug!("surface generation {} ({width}x{height})", self.generation);
    }
}
