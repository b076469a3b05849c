//! JS log function as a session sink

use wasm_bindgen::JsValue;

use crate::session::LogSink;

/// Calls the page's `log(text)` function, or nothing if it has none
pub struct JsLogSink {
    function: Option<js_sys::Function>,
}

impl JsLogSink {
    pub fn new(function: Option<js_sys::Function>) -> Self {
        Self { function }
    }
}

impl LogSink for JsLogSink {
    fn log(&self, line: &str) {
        if let Some(function) = &self.function {
            // A throwing logger must not break analysis
            let _ = function.call1(&JsValue::NULL, &JsValue::from_str(line));
        }
    }
}
