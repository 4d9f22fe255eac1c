//! Errors raised by the browser bridge.

use orrery_engine::OrreryError;
use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no global `window` object")]
    MissingWindow,

    #[error("window has no document")]
    MissingDocument,

    #[error("container element #{0} not found")]
    MissingContainer(String),

    #[error("failed to create canvas: {0}")]
    CanvasCreation(String),

    #[error("failed to register `{0}` listener")]
    Listener(&'static str),

    #[error("show not initialized; call show_init() first")]
    NotInitialized,

    #[error(transparent)]
    Config(#[from] OrreryError),
}

impl From<WebError> for JsValue {
    fn from(err: WebError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Render a thrown JS value for a log line.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
