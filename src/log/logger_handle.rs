use std::sync::mpsc;

use crate::log::{
    log_level::LogLevel,
    log_msg::{LogMsg, now_millis},
    log_sink::LogSink,
};

/// Cloneable producer side of the process logger.
///
/// Enqueues [`LogMsg`] into a bounded `SyncSender`. [`try_log`](Self::try_log)
/// never blocks: a full queue drops the line, so a slow disk can never stall
/// the receive loop.
///
/// # Examples
/// ```ignore
/// let handle = logger.handle();
/// handle.try_log(LogLevel::Info, "handshake complete", module_path!())?;
/// ```
#[derive(Clone)]
pub struct LoggerHandle {
    pub(super) tx: mpsc::SyncSender<LogMsg>,
}

impl LogSink for LoggerHandle {
    #[inline]
    fn log(&self, level: LogLevel, msg: &str, target: &'static str) {
        let _ = self.try_log(level, msg, target);
    }
}

impl LoggerHandle {
    /// Stamps and enqueues one line without blocking.
    ///
    /// # Errors
    /// - `TrySendError::Full(_)` when the queue is at capacity.
    /// - `TrySendError::Disconnected(_)` when the worker thread is gone.
    pub fn try_log<S: Into<String>>(
        &self,
        level: LogLevel,
        text: S,
        target: &'static str,
    ) -> Result<(), mpsc::TrySendError<LogMsg>> {
        self.tx
            .try_send(LogMsg::new(level, text, target, now_millis()))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::sync::mpsc::{TrySendError, sync_channel};

    #[test]
    fn try_log_queues_stamped_message() {
        let (tx, rx) = sync_channel::<LogMsg>(2);
        let h = LoggerHandle { tx };

        h.try_log(LogLevel::Warn, "short datagram", "sensorstats::server")
            .expect("queue has room");

        let msg = rx.recv().expect("a message should arrive");
        assert_eq!(msg.level, LogLevel::Warn);
        assert_eq!(msg.text, "short datagram");
        assert_eq!(msg.target, "sensorstats::server");
        assert!(msg.ts_ms > 0);
    }

    #[test]
    fn try_log_drops_when_queue_full() {
        let (tx, _rx) = sync_channel::<LogMsg>(1);
        let h = LoggerHandle { tx };

        h.try_log(LogLevel::Info, "first", "t").expect("first fits");

        match h.try_log(LogLevel::Info, "second", "t") {
            Err(TrySendError::Full(m)) => assert_eq!(m.text, "second"),
            other => panic!("expected Full, got: {:?}", other),
        }
    }

    #[test]
    fn log_sink_swallows_disconnected_worker() {
        let (tx, rx) = sync_channel::<LogMsg>(1);
        drop(rx);
        let h = LoggerHandle { tx };

        assert!(matches!(
            h.try_log(LogLevel::Error, "lost", "t"),
            Err(TrySendError::Disconnected(_))
        ));
        // Through the trait the failure is silent.
        h.log(LogLevel::Error, "lost", "t");
    }
}
