//! Host-side error type.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while wiring or updating the page.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// No global `window` (not running in a browser).
    #[error("no global window")]
    NoWindow,

    /// The window has no document.
    #[error("window has no document")]
    NoDocument,

    /// The document has no `<body>` yet.
    #[error("document has no body")]
    NoBody,

    /// A node that should be an HTML element was something else.
    #[error("expected an HTML element for {0}")]
    NotHtmlElement(&'static str),

    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe(&value))
    }
}

fn describe(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
