//! Owns one running show and the browser objects it talks to.

use orrery_engine::{FrameReport, OrreryError, ShowConfig, SolarShow, Viewport};
use web_sys::{Document, HtmlCanvasElement};

use crate::dom::{scroll_metrics, DomOverlay};
use crate::error::WebError;
use crate::host::HostRenderer;
use crate::surface::RenderSurface;

pub struct ShowRunner {
    show: SolarShow,
    surface: RenderSurface,
    document: Document,
    overlay: DomOverlay,
    renderer: HostRenderer,
}

impl ShowRunner {
    /// Mount the canvas, build the scene and size everything to the window.
    pub fn new(
        container_id: &str,
        config: ShowConfig,
        on_draw: js_sys::Function,
    ) -> Result<Self, WebError> {
        let surface = RenderSurface::mount(container_id)?;
        let document = surface.window().document().ok_or(WebError::MissingDocument)?;
        let mut renderer = HostRenderer::new(on_draw);

        let mut show = SolarShow::new(config, surface.viewport())?;
        let viewport = show.resize(surface.viewport(), &mut renderer);
        surface.fit(viewport);

        Ok(Self {
            show,
            surface,
            overlay: DomOverlay::new(document.clone()),
            document,
            renderer,
        })
    }

    /// Advance to host time `now_ms` (a `requestAnimationFrame` timestamp).
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let scroll = scroll_metrics(&self.document);
        self.show.frame(now_ms / 1000.0, scroll, &mut self.overlay, &mut self.renderer)
    }

    /// Resize to an explicit CSS size, or to the window when `size` is `None`.
    pub fn resize(&mut self, size: Option<(f32, f32)>) -> Viewport {
        let window = self.surface.viewport();
        let requested = match size {
            Some((width, height)) => Viewport::new(width, height, window.pixel_ratio),
            None => window,
        };
        let applied = self.show.resize(requested, &mut self.renderer);
        self.surface.fit(applied);
        applied
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        self.surface.canvas()
    }

    pub fn surface(&self) -> &RenderSurface {
        &self.surface
    }

    pub fn manifest_json(&self) -> Result<String, OrreryError> {
        self.show.manifest_json()
    }

    pub fn frame_ptr(&self) -> *const f32 {
        self.renderer.buffer_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.renderer.buffer_len()
    }

    pub fn node_count(&self) -> u32 {
        self.show.node_count() as u32
    }

    pub fn dust_count(&self) -> u32 {
        self.show.dust_count() as u32
    }

    pub fn segment(&self) -> Option<usize> {
        self.show.segment()
    }

    pub fn is_intro_complete(&self) -> bool {
        self.show.is_intro_complete()
    }
}
