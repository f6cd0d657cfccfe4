//! Browser frames: commands go to the iframe's window via `postMessage`.

use super::{FrameHandle, TARGET_ORIGIN};
use wasm_bindgen::JsValue;
use web_sys::HtmlIFrameElement;

pub struct IframeFrame {
    element: HtmlIFrameElement,
}

impl IframeFrame {
    pub fn new(element: HtmlIFrameElement) -> Self {
        Self { element }
    }
}

impl FrameHandle for IframeFrame {
    fn post_message(&self, payload: &str) {
        // Not loaded yet, or already detached from the document.
        let Some(window) = self.element.content_window() else {
            return;
        };
        if let Err(err) = window.post_message(&JsValue::from_str(payload), TARGET_ORIGIN) {
            tracing::debug!(?err, "postMessage to embedded player failed");
        }
    }
}
