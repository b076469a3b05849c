//! Sample scheduler - Idle / Running state machine
//!
//! Defines what a tick does and when a run ends. The timer itself belongs
//! to the host (tokio interval natively, `setInterval` in the browser); it
//! calls `tick` with the `RunId` it was started for. Ticks from a run that
//! was restarted or stopped are answered with `Stale` and change nothing.

use std::time::Duration;

use tracing::{debug, info};

use crate::analysis::AnalysisResult;
use crate::config::{validate_repeat, ConfigError};

/// Identifies one repeat run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunId(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchedulerState {
    #[default]
    Idle,
    Running {
        run: RunId,
        completed: u32,
        target: u32,
        interval: Duration,
    },
}

/// What the timer should do after a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep ticking
    Continue,
    /// Target reached, cancel the timer
    Finished,
    /// Tick belongs to a run that no longer exists, cancel the timer
    Stale,
}

/// Everything a timer driver needs to run one repeat
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatPlan {
    pub run: RunId,
    pub count: u32,
    pub interval: Duration,
}

/// Owns the result series for the current run
#[derive(Debug, Default)]
pub struct SampleScheduler {
    state: SchedulerState,
    series: Vec<AnalysisResult>,
    last_run: u64,
}

impl SampleScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running { .. })
    }

    /// Whether ticks for `run` are still accepted
    pub fn is_current(&self, run: RunId) -> bool {
        matches!(self.state, SchedulerState::Running { run: current, .. } if current == run)
    }

    /// Start a run of `count` ticks, one every `interval`
    ///
    /// Replaces the series. Calling this while running restarts: the old
    /// run's ticks turn `Stale`.
    pub fn start_repeat(&mut self, count: u32, interval: Duration) -> Result<RepeatPlan, ConfigError> {
        validate_repeat(count, interval)?;

        if let SchedulerState::Running { run, completed, .. } = self.state {
            debug!(?run, completed, "restarting over an active run");
        }

        self.last_run += 1;
        let run = RunId(self.last_run);

        self.series = Vec::new();
        self.state = SchedulerState::Running {
            run,
            completed: 0,
            target: count,
            interval,
        };
        info!(?run, count, interval_ms = interval.as_millis() as u64, "repeat run started");

        Ok(RepeatPlan { run, count, interval })
    }

    /// Record one tick of `run`
    ///
    /// A missing result still counts toward the target.
    pub fn tick(&mut self, run: RunId, result: Option<AnalysisResult>) -> TickOutcome {
        let SchedulerState::Running { run: current, completed, target, interval } = self.state else {
            debug!(?run, "tick while idle");
            return TickOutcome::Stale;
        };
        if current != run {
            debug!(?run, ?current, "tick from superseded run");
            return TickOutcome::Stale;
        }

        if let Some(result) = result {
            self.series.push(result);
        }

        let completed = completed + 1;
        if completed >= target {
            self.state = SchedulerState::Idle;
            info!(?run, ticks = completed, results = self.series.len(), "repeat run finished");
            return TickOutcome::Finished;
        }

        self.state = SchedulerState::Running { run, completed, target, interval };
        TickOutcome::Continue
    }

    /// Cancel the current run, keeping what it collected
    ///
    /// Returns false if nothing was running.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = SchedulerState::Idle;
        true
    }

    /// Append a one-off result outside of the tick sequence
    pub fn push(&mut self, result: AnalysisResult) {
        self.series.push(result);
    }

    pub fn series(&self) -> &[AnalysisResult] {
        &self.series
    }
}
