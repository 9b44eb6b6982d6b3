use std::time::SystemTime;

use crate::log::log_level::LogLevel;

/// One queued log line.
///
/// Built by [`LoggerHandle`](crate::log::logger_handle::LoggerHandle) and
/// consumed by the logger worker thread.
#[derive(Debug, Clone)]
pub struct LogMsg {
    /// Severity of the line.
    pub level: LogLevel,
    /// Wall-clock timestamp in milliseconds since the UNIX epoch.
    pub ts_ms: u128,
    /// Rendered message text.
    pub text: String,
    /// Module path the line was emitted from.
    pub target: &'static str,
}

impl LogMsg {
    /// Creates a message stamped with the given time.
    ///
    /// ```rust,ignore
    /// let msg = LogMsg::new(LogLevel::Info, "bound 0.0.0.0:8888", module_path!(), now_millis());
    /// ```
    pub fn new(
        level: LogLevel,
        text: impl Into<String>,
        target: &'static str,
        ts_ms: u128,
    ) -> Self {
        Self {
            level,
            ts_ms,
            text: text.into(),
            target,
        }
    }
}

/// Milliseconds since the UNIX epoch, or 0 if the clock is before it.
#[must_use]
pub fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
