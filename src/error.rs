use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Raised when the browser refuses to begin or resume media playback,
/// typically because autoplay with sound needs a prior user gesture.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    #[error("playback rejected: {0}")]
    Rejected(String),
    #[error("video element is not mounted")]
    Detached,
}

impl From<JsValue> for PlaybackError {
    fn from(value: JsValue) -> Self {
        PlaybackError::Rejected(describe(&value))
    }
}

/// Failures of the page glue. Logged, never shown to visitors.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(describe(&value))
    }
}

pub fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<web_sys::js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}
