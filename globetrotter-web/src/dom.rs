use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Origin of the currently served page, e.g. `https://globetrotter.example`.
/// Empty outside a browser context.
#[must_use]
pub fn location_origin() -> String {
    web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .unwrap_or_default()
}

/// Copy text to the system clipboard. Failures are ignored; the calling UI
/// shows its own feedback.
pub fn clipboard_write(text: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.navigator().clipboard().write_text(text);
    }
}

/// Open a share target in a new tab.
pub fn open_in_new_tab(url: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.open_with_url_and_target(url, "_blank");
    }
}

/// Crude mobile detection for picking the native-app share URL variant.
#[must_use]
pub fn is_mobile_user_agent() -> bool {
    web_sys::window()
        .and_then(|win| win.navigator().user_agent().ok())
        .is_some_and(|agent| {
            ["Android", "iPhone", "iPad", "iPod", "BlackBerry", "Opera Mini"]
                .iter()
                .any(|token| agent.contains(token))
        })
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
