//! `setInterval` handle
//!
//! Keeps the Rust closure alive for as long as the browser may call it.
//! `cancel` only clears the interval, so it is safe to call from inside the
//! callback itself; the closure is freed when the timer is dropped, which
//! happens outside the callback (next start, stop, or analyzer drop).

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::error::BridgeError;

pub(crate) struct IntervalTimer {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl IntervalTimer {
    pub(crate) fn start(interval_ms: u32, callback: impl FnMut() + 'static) -> Result<Self, BridgeError> {
        let timeout = i32::try_from(interval_ms).map_err(|_| BridgeError::IntervalTooLong(interval_ms))?;
        let window = web_sys::window().ok_or(BridgeError::NoWindow)?;

        let callback = Closure::<dyn FnMut()>::new(callback);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), timeout)
            .map_err(|e| BridgeError::Timer(format!("{:?}", e)))?;

        Ok(Self {
            handle,
            _callback: callback,
        })
    }

    /// Stop further ticks
    pub(crate) fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
