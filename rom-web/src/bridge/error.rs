//! Bridge errors and their JS conversions

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::config::ConfigError;
use crate::hand::FrameError;

/// Errors that can occur while talking to the browser
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("No window found")]
    NoWindow,

    #[error("Interval of {0} ms is too long for setInterval")]
    IntervalTooLong(u32),

    #[error("setInterval failed: {0}")]
    Timer(String),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
