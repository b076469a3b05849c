//! Native timer driver
//!
//! Ticks a session on a tokio interval. First tick fires one interval after
//! start, like `setInterval`.

use std::cell::RefCell;
use std::time::Duration;

use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::state::{RepeatPlan, TickOutcome};
use crate::config::ConfigError;
use crate::session::Session;

/// Start a repeat run on `session` and drive it to the end
///
/// Returns `Finished`, or `Stale` if the run was restarted or stopped
/// from elsewhere while waiting.
pub async fn drive_repeat(session: &RefCell<Session>, count: u32, interval: Duration) -> Result<TickOutcome, ConfigError> {
    let plan = session.borrow_mut().start_repeat(count, interval)?;
    Ok(drive(session, plan).await)
}

/// Drive an already started run
pub async fn drive(session: &RefCell<Session>, plan: RepeatPlan) -> TickOutcome {
    let mut ticker = interval_at(Instant::now() + plan.interval, plan.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let outcome = session.borrow_mut().tick(plan.run);
        if outcome != TickOutcome::Continue {
            return outcome;
        }
    }
}
