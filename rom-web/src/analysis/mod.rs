//! Analysis module - per-frame ring/pinky range-of-motion records
//!
//! Re-exports only. All logic in submodules.

mod metrics;
mod analyzer;

pub use metrics::{joa, AnalysisResult, JointMetrics};
pub use analyzer::{measure_finger, FingerChain, FrameAnalyzer, PINKY_CHAIN, RING_CHAIN};
