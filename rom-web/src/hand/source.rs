//! Frame source - where the analyzer reads the current hand from
//!
//! The tracker writes the latest frame into a slot between ticks; the
//! analysis side only ever reads it. The slot may be empty at any time.

use std::cell::RefCell;
use std::rc::Rc;

use super::landmarks::LandmarkFrame;

/// Anything that can hand over the tracker's current frame
pub trait FrameSource {
    /// Current frame, or `None` when the tracker has no hand
    fn current_frame(&self) -> Option<LandmarkFrame>;
}

/// Clonable single-frame slot shared between the tracker and a session
///
/// Single-threaded (WASM host), so `Rc<RefCell<..>>` is enough.
#[derive(Clone, Default)]
pub struct SharedFrame {
    slot: Rc<RefCell<Option<LandmarkFrame>>>,
}

impl SharedFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current frame
    pub fn set(&self, frame: LandmarkFrame) {
        *self.slot.borrow_mut() = Some(frame);
    }

    /// Drop the current frame (hand lost)
    pub fn clear(&self) {
        self.slot.borrow_mut().take();
    }

    pub fn has_frame(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl FrameSource for SharedFrame {
    fn current_frame(&self) -> Option<LandmarkFrame> {
        *self.slot.borrow()
    }
}

/// A fixed frame (or none), mostly for tests and offline replays
impl FrameSource for Option<LandmarkFrame> {
    fn current_frame(&self) -> Option<LandmarkFrame> {
        *self
    }
}
