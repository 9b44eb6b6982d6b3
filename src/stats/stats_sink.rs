use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};

use crate::{log::log_sink::LogSink, sink_warn};

use super::channel_statistics::ChannelStatistics;

/// Receives the statistics of every accepted batch.
pub trait StatsSink {
    fn report(&self, batch_no: u64, stats: &ChannelStatistics);
}

/// Prints each report to stdout (or any writer).
///
/// A failed write does not stop the session; it is logged at warn.
pub struct ConsoleStatsSink<W = io::Stdout> {
    out: Mutex<W>,
    log: Arc<dyn LogSink>,
}

impl ConsoleStatsSink {
    pub fn new(log: Arc<dyn LogSink>) -> Self {
        Self::with_writer(io::stdout(), log)
    }
}

impl<W: Write> ConsoleStatsSink<W> {
    pub fn with_writer(out: W, log: Arc<dyn LogSink>) -> Self {
        Self {
            out: Mutex::new(out),
            log,
        }
    }
}

impl<W: Write> StatsSink for ConsoleStatsSink<W> {
    fn report(&self, batch_no: u64, stats: &ChannelStatistics) {
        let mut out = self.out.lock().unwrap_or_else(|p| p.into_inner());
        if let Err(e) = writeln!(out, "{stats}").and_then(|()| out.flush()) {
            sink_warn!(self.log, "report for batch {} not written: {}", batch_no, e);
        }
    }
}
