//! Render surface: the canvas the host library draws into.

use orrery_engine::Viewport;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::error::{describe, WebError};

pub struct RenderSurface {
    window: Window,
    canvas: HtmlCanvasElement,
}

impl RenderSurface {
    /// Create a canvas and append it to the element `container_id`.
    pub fn mount(container_id: &str) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::MissingWindow)?;
        let document = window.document().ok_or(WebError::MissingDocument)?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| WebError::MissingContainer(container_id.to_owned()))?;

        let canvas = document
            .create_element("canvas")
            .map_err(|e| WebError::CanvasCreation(describe(&e)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| WebError::CanvasCreation("element is not a canvas".into()))?;
        container
            .append_child(&canvas)
            .map_err(|e| WebError::CanvasCreation(describe(&e)))?;

        log::info!("render surface mounted in #{container_id}");
        Ok(Self { window, canvas })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Current window size in CSS pixels and the device pixel ratio.
    pub fn viewport(&self) -> Viewport {
        let size = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        Viewport::new(
            size(self.window.inner_width()),
            size(self.window.inner_height()),
            self.window.device_pixel_ratio() as f32,
        )
    }

    /// Size the backing store in device pixels and the element in CSS pixels.
    pub fn fit(&self, viewport: Viewport) {
        let scale = viewport.pixel_ratio;
        self.canvas.set_width((viewport.width * scale).round().max(0.0) as u32);
        self.canvas.set_height((viewport.height * scale).round().max(0.0) as u32);
        let style = self.canvas.style();
        for (name, px) in [("width", viewport.width), ("height", viewport.height)] {
            if let Err(e) = style.set_property(name, &format!("{px}px")) {
                log::warn!("canvas style {name}: {}", describe(&e));
            }
        }
    }
}

/// Run `handler` on every window `resize` event for the life of the page.
pub fn on_resize(window: &Window, handler: impl FnMut() + 'static) -> Result<(), WebError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|_| WebError::Listener("resize"))?;
    closure.forget();
    Ok(())
}
