//! Log sink - human-readable progress lines for the host
//!
//! Any `Fn(&str)` is a sink. `NoopSink` stands in when the host has none;
//! the analysis behaves the same either way.

/// Receives one line of progress or JSON output at a time
pub trait LogSink {
    fn log(&self, line: &str);
}

/// Discards everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn log(&self, _line: &str) {}
}

/// Forwards lines to `tracing` at info level (native hosts)
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, line: &str) {
        tracing::info!(target: "rom_web::host", "{line}");
    }
}

impl<F> LogSink for F
where
    F: Fn(&str),
{
    fn log(&self, line: &str) {
        self(line)
    }
}
