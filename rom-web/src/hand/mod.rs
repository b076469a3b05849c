//! Hand module - 21-point landmark frames and where they come from
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod source;

#[cfg(test)]
pub(crate) mod fixtures;

pub use landmarks::{
    FrameError, Landmark, LandmarkFrame,
    FLAT_FRAME_LEN, HAND_LANDMARK_COUNT,
    // Indices
    WRIST,
    THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use source::{FrameSource, SharedFrame};
