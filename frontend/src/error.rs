use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a call into the browser. None of these are fatal for the page.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BrowserError {
    #[error("no window available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("scheduling widget is not loaded")]
    WidgetMissing,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<web_sys::Window, BrowserError> {
    web_sys::window().ok_or(BrowserError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, BrowserError> {
    window()?.document().ok_or(BrowserError::NoDocument)
}
