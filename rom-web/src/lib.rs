//! ROM Web - ring/pinky finger range-of-motion analysis
//!
//! Computes signed MCP/PIP/DIP angles, normalized fingertip distance and the
//! JOA aggregate from one MediaPipe Hands frame, and repeats that on a timer
//! to build a time series.
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations and re-exports
//! - wasm_bindgen entry points that delegate to submodules

pub mod analysis;
pub mod config;
pub mod geometry;
pub mod hand;
pub mod scheduler;
pub mod session;

mod bridge;

use wasm_bindgen::prelude::*;

pub use analysis::{AnalysisResult, FrameAnalyzer, JointMetrics};
pub use bridge::{BridgeError, JsLogSink, RomAnalyzer};
pub use config::{ConfigError, RomConfig};
pub use geometry::GeometryError;
pub use hand::{FrameError, FrameSource, Landmark, LandmarkFrame, SharedFrame};
pub use scheduler::{RepeatPlan, RunId, SampleScheduler, SchedulerState, TickOutcome};
pub use session::{LogSink, NoopSink, Session, TracingSink};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
