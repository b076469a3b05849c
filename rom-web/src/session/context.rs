//! Session - one analyzer context owned by the host
//!
//! Holds the configuration, the frame source, the log sink, the analyzer
//! and the scheduler. Nothing here is global; the host creates a session
//! and hands it to whatever timer drives repeat runs.

use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use super::sink::LogSink;
use crate::analysis::{AnalysisResult, FrameAnalyzer};
use crate::config::{validate_repeat, ConfigError, RomConfig};
use crate::hand::FrameSource;
use crate::scheduler::{RepeatPlan, RunId, SampleScheduler, SchedulerState, TickOutcome};

pub struct Session {
    config: RomConfig,
    analyzer: FrameAnalyzer,
    scheduler: SampleScheduler,
    source: Box<dyn FrameSource>,
    sink: Box<dyn LogSink>,
}

impl Session {
    /// Create a session and announce it on the sink
    pub fn new<F, S>(config: RomConfig, source: F, sink: S) -> Self
    where
        F: FrameSource + 'static,
        S: LogSink + 'static,
    {
        let session = Self {
            analyzer: FrameAnalyzer::from_config(&config),
            scheduler: SampleScheduler::new(),
            source: Box::new(source),
            sink: Box::new(sink),
            config,
        };

        session.log(&format!(
            "Analyze core loaded ({} {})",
            session.config.rom_id, session.config.version
        ));
        session.log(&format!("BUILD {}", session.config.build));
        session
    }

    pub fn config(&self) -> &RomConfig {
        &self.config
    }

    pub fn set_rom_id(&mut self, rom_id: impl Into<String>) {
        self.config.rom_id = rom_id.into();
        self.analyzer.set_rom_id(self.config.rom_id.clone());
    }

    /// Default tick count for `start_repeat_default`
    pub fn set_repeat_count(&mut self, count: u32) -> Result<(), ConfigError> {
        validate_repeat(count, self.config.repeat_interval())?;
        self.config.repeat_count = count;
        Ok(())
    }

    /// Default tick period for `start_repeat_default`
    pub fn set_repeat_interval_ms(&mut self, interval_ms: u32) -> Result<(), ConfigError> {
        validate_repeat(self.config.repeat_count, Duration::from_millis(u64::from(interval_ms)))?;
        self.config.repeat_interval_ms = interval_ms;
        Ok(())
    }

    /// Analyze the current frame once and append it to the series
    ///
    /// Returns `None` (and logs "No landmarks") when the tracker has no hand.
    pub fn analyze(&mut self) -> Option<AnalysisResult> {
        let result = self.analyze_current()?;
        self.scheduler.push(result.clone());
        Some(result)
    }

    /// Start a repeat run; the series starts over
    pub fn start_repeat(&mut self, count: u32, interval: Duration) -> Result<RepeatPlan, ConfigError> {
        let plan = self.scheduler.start_repeat(count, interval)?;
        self.log(&format!("Repeat analyze start: {count} times"));
        Ok(plan)
    }

    /// Start a repeat run with the configured count and interval
    pub fn start_repeat_default(&mut self) -> Result<RepeatPlan, ConfigError> {
        self.start_repeat(self.config.repeat_count, self.config.repeat_interval())
    }

    /// One timer tick of `run`
    pub fn tick(&mut self, run: RunId) -> TickOutcome {
        if !self.scheduler.is_current(run) {
            return self.scheduler.tick(run, None);
        }

        let result = self.analyze_current();
        let outcome = self.scheduler.tick(run, result);

        if outcome == TickOutcome::Finished {
            self.log("Repeat analyze finished");
            self.log_json("SUMMARY", self.scheduler.series());
        }
        outcome
    }

    /// Cancel the active run, keeping its results
    pub fn stop(&mut self) -> bool {
        self.scheduler.stop()
    }

    pub fn state(&self) -> SchedulerState {
        self.scheduler.state()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Results of the current (or most recent) run
    pub fn results(&self) -> &[AnalysisResult] {
        self.scheduler.series()
    }

    pub fn results_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self.scheduler.series())
    }

    fn analyze_current(&self) -> Option<AnalysisResult> {
        self.log("analyze() start");
        self.log(&format!("ROM={} VER={}", self.analyzer.rom_id(), self.analyzer.version()));

        let frame = self.source.current_frame();
        let Some(result) = self.analyzer.analyze_frame(frame.as_ref()) else {
            self.log("No landmarks");
            return None;
        };

        self.log_json("RESULT", &result);
        Some(result)
    }

    fn log(&self, line: &str) {
        self.sink.log(line);
    }

    fn log_json<T: Serialize + ?Sized>(&self, prefix: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.log(&format!("{prefix} {json}")),
            Err(err) => warn!(prefix, %err, "could not serialize log payload"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::hand::fixtures::straight_hand;
    use crate::hand::{LandmarkFrame, SharedFrame};
    use crate::session::NoopSink;

    const TICK: Duration = Duration::from_millis(10);

    fn capture() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str)) {
        let lines = Rc::new(RefCell::new(Vec::new()));
        let sink_lines = Rc::clone(&lines);
        (lines, move |line: &str| sink_lines.borrow_mut().push(line.to_string()))
    }

    #[test]
    fn test_load_banner() {
        let (lines, sink) = capture();
        let _session = Session::new(RomConfig::default(), None::<LandmarkFrame>, sink);

        assert_eq!(
            *lines.borrow(),
            vec!["Analyze core loaded (12ROM v1.0.0)", "BUILD 2026-01-02T07:30"]
        );
    }

    #[test]
    fn test_analyze_without_frame() {
        let (lines, sink) = capture();
        let mut session = Session::new(RomConfig::default(), None::<LandmarkFrame>, sink);
        lines.borrow_mut().clear();

        assert!(session.analyze().is_none());
        assert!(session.results().is_empty());
        assert_eq!(
            *lines.borrow(),
            vec!["analyze() start", "ROM=12ROM VER=v1.0.0", "No landmarks"]
        );
    }

    #[test]
    fn test_analyze_appends_and_logs_result() {
        let (lines, sink) = capture();
        let mut session = Session::new(RomConfig::default(), Some(straight_hand()), sink);

        let result = session.analyze().unwrap();
        assert_eq!(session.results(), &[result.clone()]);

        let last = lines.borrow().last().cloned().unwrap();
        let payload = last.strip_prefix("RESULT ").unwrap();
        let logged: AnalysisResult = serde_json::from_str(payload).unwrap();
        assert_eq!(logged, result);
    }

    #[test]
    fn test_repeat_run_with_summary() {
        let (lines, sink) = capture();
        let mut session = Session::new(RomConfig::default(), Some(straight_hand()), sink);

        let plan = session.start_repeat(3, TICK).unwrap();
        assert!(lines.borrow().contains(&"Repeat analyze start: 3 times".to_string()));

        assert_eq!(session.tick(plan.run), TickOutcome::Continue);
        assert_eq!(session.tick(plan.run), TickOutcome::Continue);
        assert_eq!(session.tick(plan.run), TickOutcome::Finished);
        assert_eq!(session.state(), SchedulerState::Idle);
        assert_eq!(session.results().len(), 3);

        let lines = lines.borrow();
        let n = lines.len();
        assert_eq!(lines[n - 2], "Repeat analyze finished");
        let summary: Vec<AnalysisResult> =
            serde_json::from_str(lines[n - 1].strip_prefix("SUMMARY ").unwrap()).unwrap();
        assert_eq!(summary, session.results());
    }

    #[test]
    fn test_hand_lost_mid_run() {
        let frame = SharedFrame::new();
        frame.set(straight_hand());
        let mut session = Session::new(RomConfig::default(), frame.clone(), NoopSink);

        let plan = session.start_repeat(3, TICK).unwrap();
        session.tick(plan.run);
        frame.clear();
        session.tick(plan.run);
        frame.set(straight_hand());
        assert_eq!(session.tick(plan.run), TickOutcome::Finished);

        assert_eq!(session.results().len(), 2);
    }

    #[test]
    fn test_restart_makes_old_ticks_stale() {
        let mut session = Session::new(RomConfig::default(), Some(straight_hand()), NoopSink);
        let first = session.start_repeat(5, TICK).unwrap();
        session.tick(first.run);

        let second = session.start_repeat(2, TICK).unwrap();
        assert_eq!(session.tick(first.run), TickOutcome::Stale);
        assert!(session.results().is_empty());
        assert_eq!(session.tick(second.run), TickOutcome::Continue);
    }

    #[test]
    fn test_config_setters() {
        let mut session = Session::new(RomConfig::default(), Some(straight_hand()), NoopSink);

        session.set_rom_id("13ROM");
        assert_eq!(session.analyze().unwrap().rom, "13ROM");

        assert!(matches!(session.set_repeat_count(0), Err(ConfigError::ZeroRepeatCount)));
        assert!(matches!(session.set_repeat_interval_ms(0), Err(ConfigError::ZeroInterval)));
        session.set_repeat_count(4).unwrap();
        session.set_repeat_interval_ms(50).unwrap();

        let plan = session.start_repeat_default().unwrap();
        assert_eq!(plan.count, 4);
        assert_eq!(plan.interval, Duration::from_millis(50));
    }

    #[test]
    fn test_results_json() {
        let mut session = Session::new(RomConfig::default(), Some(straight_hand()), NoopSink);
        assert_eq!(session.results_json().unwrap(), "[]");

        session.analyze();
        let parsed: Vec<AnalysisResult> = serde_json::from_str(&session.results_json().unwrap()).unwrap();
        assert_eq!(parsed, session.results());
    }
}
