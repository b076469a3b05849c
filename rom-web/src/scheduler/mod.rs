//! Scheduler module - repeat-run state machine and its timer drivers
//!
//! Re-exports only. All logic in submodules.

mod state;
#[cfg(not(target_arch = "wasm32"))]
mod driver;

pub use state::{RepeatPlan, RunId, SampleScheduler, SchedulerState, TickOutcome};
#[cfg(not(target_arch = "wasm32"))]
pub use driver::{drive, drive_repeat};
