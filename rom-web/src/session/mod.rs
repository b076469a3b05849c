//! Session module - the host-owned context tying frames, analysis,
//! scheduling and log output together
//!
//! Re-exports only. All logic in submodules.

mod sink;
mod context;

pub use sink::{LogSink, NoopSink, TracingSink};
pub use context::Session;
