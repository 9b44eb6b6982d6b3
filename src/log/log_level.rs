/// Severity of a log line, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Per-datagram byte traces.
    Trace,
    /// Decoded values and state transitions.
    Debug,
    /// Session milestones (bind, handshake, shutdown).
    Info,
    /// Rejected batches, unexpected peers, receive hiccups.
    Warn,
    /// Faults that end the session or should never happen.
    Error,
}

impl LogLevel {
    /// Warn and Error lines are also echoed on stderr by the file logger.
    #[must_use]
    pub fn is_alert(self) -> bool {
        matches!(self, LogLevel::Warn | LogLevel::Error)
    }
}
