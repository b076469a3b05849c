//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod analyzer;
mod error;
mod sink;
mod timer;

pub use analyzer::RomAnalyzer;
pub use error::BridgeError;
pub use sink::JsLogSink;
