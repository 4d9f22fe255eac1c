//! WASM bridge: mounts the canvas, drives the show from
//! `requestAnimationFrame` and exposes the frame buffer to the host page.

use std::cell::RefCell;

use orrery_engine::ShowConfig;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

pub mod dom;
pub mod error;
pub mod host;
pub mod runner;
pub mod surface;

pub use error::WebError;
pub use runner::ShowRunner;

thread_local! {
    static RUNNER: RefCell<Option<ShowRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut ShowRunner) -> R) -> Result<R, WebError> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.as_mut().ok_or(WebError::NotInitialized)?;
        Ok(f(runner))
    })
}

fn log_level(name: &str) -> log::Level {
    name.parse().unwrap_or(log::Level::Info)
}

/// Build the show inside `container_id` and return its canvas.
///
/// `on_draw(ptr, len)` is called once per frame with the location of the
/// packed frame buffer in wasm memory. It must not call back into these
/// exports.
#[wasm_bindgen]
pub fn show_init(
    container_id: Option<String>,
    config_json: Option<String>,
    on_draw: js_sys::Function,
) -> Result<HtmlCanvasElement, JsValue> {
    console_error_panic_hook::set_once();

    let parsed = config_json.as_deref().map(ShowConfig::from_json).transpose();
    let mut config = match parsed {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            let _ = console_log::init_with_level(log::Level::Info);
            log::error!("show config rejected: {e}");
            return Err(WebError::from(e).into());
        }
    };
    let _ = console_log::init_with_level(log_level(&config.log_level));

    if config.seed.is_none() {
        config.seed = Some((js_sys::Math::random() * (1u64 << 53) as f64) as u64);
    }
    let container_id = container_id.unwrap_or_else(|| config.surface.container_id.clone());

    let runner = ShowRunner::new(&container_id, config, on_draw).map_err(|e| {
        log::error!("show_init failed: {e}");
        e
    })?;
    let canvas = runner.canvas().clone();
    let window = runner.surface().window().clone();
    RUNNER.with(|cell| *cell.borrow_mut() = Some(runner));

    surface::on_resize(&window, || {
        if let Err(e) = with_runner(|r| r.resize(None)) {
            log::warn!("resize ignored: {e}");
        }
    })?;

    log::info!("orrery: initialized in #{container_id}");
    Ok(canvas)
}

/// Advance one frame. `now_ms` is the `requestAnimationFrame` timestamp.
#[wasm_bindgen]
pub fn show_frame(now_ms: f64) -> Result<(), JsValue> {
    with_runner(|r| {
        r.frame(now_ms);
    })?;
    Ok(())
}

/// Resize to `width` x `height` CSS pixels, or to the window when either is
/// absent.
#[wasm_bindgen]
pub fn show_resize(width: Option<f64>, height: Option<f64>) -> Result<(), JsValue> {
    let size = width.zip(height).map(|(w, h)| (w as f32, h as f32));
    with_runner(|r| {
        r.resize(size);
    })?;
    Ok(())
}

/// Scene description as JSON, read once after `show_init`.
#[wasm_bindgen]
pub fn get_scene_manifest() -> Result<String, JsValue> {
    let json = with_runner(|r| r.manifest_json())?.map_err(WebError::from)?;
    Ok(json)
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_frame_ptr() -> Result<*const f32, JsValue> {
    Ok(with_runner(|r| r.frame_ptr())?)
}

#[wasm_bindgen]
pub fn get_frame_len() -> Result<u32, JsValue> {
    Ok(with_runner(|r| r.frame_len())?)
}

#[wasm_bindgen]
pub fn get_node_count() -> Result<u32, JsValue> {
    Ok(with_runner(|r| r.node_count())?)
}

#[wasm_bindgen]
pub fn get_dust_count() -> Result<u32, JsValue> {
    Ok(with_runner(|r| r.dust_count())?)
}

/// Active scroll segment, or -1 while the intro runs.
#[wasm_bindgen]
pub fn get_segment_index() -> Result<i32, JsValue> {
    Ok(with_runner(|r| r.segment().map_or(-1, |s| s as i32))?)
}

#[wasm_bindgen]
pub fn is_intro_complete() -> Result<bool, JsValue> {
    Ok(with_runner(|r| r.is_intro_complete())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_names() {
        assert_eq!(log_level("debug"), log::Level::Debug);
        assert_eq!(log_level("WARN"), log::Level::Warn);
        assert_eq!(log_level("nonsense"), log::Level::Info);
    }

    #[test]
    fn exports_fail_before_init() {
        assert!(matches!(with_runner(|_| ()), Err(WebError::NotInitialized)));
    }
}
