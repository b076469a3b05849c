//! `RomAnalyzer` - the object the page holds
//!
//! The page feeds landmarks in from its MediaPipe callback and calls
//! `analyze` / `analyzeRepeat`. Everything lives inside this object; there
//! is no module-level state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use wasm_bindgen::prelude::*;

use super::error::BridgeError;
use super::sink::JsLogSink;
use super::timer::IntervalTimer;
use crate::config::RomConfig;
use crate::hand::{LandmarkFrame, SharedFrame};
use crate::scheduler::TickOutcome;
use crate::session::Session;

#[wasm_bindgen]
pub struct RomAnalyzer {
    session: Rc<RefCell<Session>>,
    frame: SharedFrame,
    timer: Rc<RefCell<Option<IntervalTimer>>>,
}

#[wasm_bindgen]
impl RomAnalyzer {
    /// `new RomAnalyzer(configJson?, log?)`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>, log: Option<js_sys::Function>) -> Result<RomAnalyzer, JsValue> {
        let config = match config_json {
            Some(raw) => RomConfig::from_json(&raw)?,
            None => RomConfig::default(),
        };

        let frame = SharedFrame::new();
        let session = Session::new(config, frame.clone(), JsLogSink::new(log));

        Ok(RomAnalyzer {
            session: Rc::new(RefCell::new(session)),
            frame,
            timer: Rc::new(RefCell::new(None)),
        })
    }

    /// Called from JavaScript with flat Float64Array of 63 values
    /// (21 landmarks × 3 coordinates: x, y, z)
    #[wasm_bindgen(js_name = updateHandLandmarks)]
    pub fn update_hand_landmarks(&self, data: &[f64]) {
        match LandmarkFrame::from_flat(data) {
            Ok(frame) => self.frame.set(frame),
            Err(err) => web_sys::console::warn_1(&err.to_string().into()),
        }
    }

    /// Hand lost: the next analysis reports "No landmarks"
    #[wasm_bindgen(js_name = clearHandLandmarks)]
    pub fn clear_hand_landmarks(&self) {
        self.frame.clear();
    }

    /// Analyze the current frame once; JSON result or `undefined`
    pub fn analyze(&self) -> Result<Option<String>, JsValue> {
        let result = self.session.borrow_mut().analyze();
        match result {
            Some(result) => Ok(Some(serde_json::to_string(&result).map_err(BridgeError::from)?)),
            None => Ok(None),
        }
    }

    /// Repeat `analyze` every `intervalMs` for `count` ticks
    ///
    /// Both default to the configured values. Restarts any active run.
    #[wasm_bindgen(js_name = analyzeRepeat)]
    pub fn analyze_repeat(&self, count: Option<u32>, interval_ms: Option<u32>) -> Result<(), JsValue> {
        let (count, interval_ms) = {
            let session = self.session.borrow();
            let config = session.config();
            (
                count.unwrap_or(config.repeat_count),
                interval_ms.unwrap_or(config.repeat_interval_ms),
            )
        };

        // Old interval goes first so it can never tick into the new run
        self.timer.borrow_mut().take();

        let plan = self
            .session
            .borrow_mut()
            .start_repeat(count, Duration::from_millis(u64::from(interval_ms)))?;

        let session = Rc::clone(&self.session);
        let timer_slot: Weak<RefCell<Option<IntervalTimer>>> = Rc::downgrade(&self.timer);

        let timer = IntervalTimer::start(interval_ms, move || {
            let outcome = session.borrow_mut().tick(plan.run);
            match outcome {
                TickOutcome::Continue => {}
                TickOutcome::Finished | TickOutcome::Stale => {
                    if let Some(slot) = timer_slot.upgrade() {
                        if let Some(timer) = slot.borrow().as_ref() {
                            timer.cancel();
                        }
                    }
                }
            }
        });

        match timer {
            Ok(timer) => {
                *self.timer.borrow_mut() = Some(timer);
                Ok(())
            }
            Err(err) => {
                self.session.borrow_mut().stop();
                Err(err.into())
            }
        }
    }

    /// Cancel the active run, keeping its results
    pub fn stop(&self) {
        self.timer.borrow_mut().take();
        self.session.borrow_mut().stop();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.session.borrow().is_running()
    }

    /// Current / most recent result series as a JSON array
    #[wasm_bindgen(js_name = resultsJson)]
    pub fn results_json(&self) -> Result<String, JsValue> {
        let json = self.session.borrow().results_json().map_err(BridgeError::from)?;
        Ok(json)
    }

    #[wasm_bindgen(js_name = setRomId)]
    pub fn set_rom_id(&self, rom_id: String) {
        self.session.borrow_mut().set_rom_id(rom_id);
    }

    #[wasm_bindgen(js_name = setRepeatCount)]
    pub fn set_repeat_count(&self, count: u32) -> Result<(), JsValue> {
        self.session.borrow_mut().set_repeat_count(count)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = setRepeatIntervalMs)]
    pub fn set_repeat_interval_ms(&self, interval_ms: u32) -> Result<(), JsValue> {
        self.session.borrow_mut().set_repeat_interval_ms(interval_ms)?;
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = romId)]
    pub fn rom_id(&self) -> String {
        self.session.borrow().config().rom_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> String {
        self.session.borrow().config().version.clone()
    }
}
