use std::{net::SocketAddr, sync::Arc};

use crate::{
    log::log_sink::LogSink,
    sensor::{SensorError, sensor_codec},
    sink_debug, sink_error, sink_info, sink_trace, sink_warn,
    stats::StatsSink,
};

use super::{
    constants::{ACK, GREETING, HANDSHAKE_BUF_SIZE, RECV_BUF_SIZE},
    server_error::ServerError,
    session_state::SessionState,
    session_stats::SessionStats,
    shutdown::ShutdownToken,
    transport::{DatagramTransport, is_timeout},
};

/// Single-peer receive → aggregate → acknowledge loop.
///
/// One handshake datagram sets the peer; after that every datagram is decoded
/// as a batch of `batch_size` records, reported, and acknowledged to its
/// sender. A datagram from another address replaces the tracked peer.
/// The loop exits once `shutdown` is cancelled, which is checked after every
/// receive returns (including read timeouts).
pub struct SensorSession<T: DatagramTransport> {
    transport: T,
    batch_size: usize,
    shutdown: ShutdownToken,
    log: Arc<dyn LogSink>,
    reporter: Box<dyn StatsSink>,
    state: SessionState,
    stats: SessionStats,
}

impl<T: DatagramTransport> SensorSession<T> {
    pub fn new(
        transport: T,
        batch_size: usize,
        shutdown: ShutdownToken,
        log: Arc<dyn LogSink>,
        reporter: Box<dyn StatsSink>,
    ) -> Self {
        Self {
            transport,
            batch_size,
            shutdown,
            log,
            reporter,
            state: SessionState::AwaitingHandshake,
            stats: SessionStats::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Runs handshake and streaming until shutdown.
    ///
    /// # Errors
    /// - Handshake receive/send failure.
    /// - Failure to send a batch acknowledgment.
    ///
    /// Truncated batches and non-timeout receive errors while streaming are
    /// logged and counted, not returned.
    pub fn run(&mut self) -> Result<SessionStats, ServerError> {
        if let Ok(addr) = self.transport.local_addr() {
            sink_info!(self.log, "listening on {} (batch size {})", addr, self.batch_size);
        }

        if self.await_handshake()?.is_none() {
            return Ok(self.close());
        }

        let mut buf = vec![0u8; RECV_BUF_SIZE.max(sensor_codec::batch_len(self.batch_size))];
        while !self.shutdown.is_cancelled() {
            match self.transport.recv_from(&mut buf) {
                Ok((n, from)) => self.handle_datagram(&buf[..n], from)?,
                Err(e) if is_timeout(&e) => {}
                Err(e) => {
                    self.stats.recv_errors += 1;
                    sink_warn!(self.log, "failed to receive sensor data: {}", e);
                }
            }
        }

        Ok(self.close())
    }

    /// Waits for the first datagram and greets its sender.
    ///
    /// Returns `None` if shutdown was requested before anyone spoke.
    fn await_handshake(&mut self) -> Result<Option<SocketAddr>, ServerError> {
        let mut buf = [0u8; HANDSHAKE_BUF_SIZE];
        loop {
            if self.shutdown.is_cancelled() {
                return Ok(None);
            }
            match self.transport.recv_from(&mut buf) {
                Ok((n, from)) => {
                    let hello = String::from_utf8_lossy(&buf[..n]);
                    sink_info!(self.log, "received message from client {} - {}", from, hello);

                    self.transport.send_to(GREETING, from)?;
                    self.state = SessionState::Streaming { peer: from };
                    sink_info!(self.log, "handshake complete, streaming from {}", from);
                    return Ok(Some(from));
                }
                Err(e) if is_timeout(&e) => {}
                Err(e) => {
                    sink_error!(self.log, "handshake receive failed: {}", e);
                    return Err(ServerError::Transport(e));
                }
            }
        }
    }

    /// Decodes, reports and acknowledges one streaming datagram.
    ///
    /// The sender becomes the tracked peer, whether or not the batch decodes.
    fn handle_datagram(&mut self, bytes: &[u8], from: SocketAddr) -> Result<(), ServerError> {
        sink_trace!(self.log, "datagram of {} bytes from {}", bytes.len(), from);
        if let Some(previous) = self.state.peer().filter(|p| *p != from) {
            self.stats.foreign_datagrams += 1;
            sink_warn!(
                self.log,
                "datagram from {} while streaming with {}; switching peer",
                from,
                previous
            );
        }
        self.state = SessionState::Streaming { peer: from };

        let batch = match sensor_codec::decode_batch(bytes, self.batch_size) {
            Ok(b) => b,
            Err(e @ SensorError::TruncatedBatch { .. }) => {
                self.stats.batches_rejected += 1;
                sink_warn!(self.log, "skipping batch from {}: {}", from, e);
                return Ok(());
            }
            Err(e @ SensorError::InvalidBatchSize { .. }) => {
                self.stats.batches_rejected += 1;
                sink_error!(self.log, "decoder produced an invalid batch: {}", e);
                return Ok(());
            }
        };

        let summary = batch.statistics();
        self.stats.batches_processed += 1;
        sink_debug!(
            self.log,
            "batch {}: mean={:?} std_dev={:?}",
            self.stats.batches_processed,
            summary.mean(),
            summary.std_dev()
        );
        self.reporter.report(self.stats.batches_processed, &summary);

        if let Err(e) = self.transport.send_to(ACK, from) {
            sink_error!(self.log, "sendto {} failed: {}", from, e);
            return Err(ServerError::Transport(e));
        }
        Ok(())
    }

    fn close(&mut self) -> SessionStats {
        self.state = SessionState::Closed;
        sink_info!(self.log, "session closed: {}", self.stats);
        self.stats
    }
}
