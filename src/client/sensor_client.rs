use std::{
    net::{SocketAddr, UdpSocket},
    sync::Arc,
    time::Duration,
};

use rand::Rng;

use crate::{
    log::log_sink::LogSink,
    sensor::{SensorRecord, sensor_codec::encode_batch},
    server::constants::{ACK, GREETING},
    sink_debug, sink_info,
};

use super::client_error::ClientError;

/// Standard gravity; accelerations are generated within ±2 g.
const G: f32 = 9.806_65;

/// Counterpart of the sensor server: handshake once, then send batches and
/// wait for each acknowledgment.
pub struct SensorClient {
    sock: UdpSocket,
    server: SocketAddr,
    log: Arc<dyn LogSink>,
}

impl SensorClient {
    /// Binds an ephemeral local port of the same family as `server`.
    ///
    /// # Errors
    /// Socket creation or option failures.
    pub fn connect(
        server: SocketAddr,
        reply_timeout: Duration,
        log: Arc<dyn LogSink>,
    ) -> Result<Self, ClientError> {
        let local: SocketAddr = if server.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };
        let sock = UdpSocket::bind(local)?;
        sock.set_read_timeout(Some(reply_timeout))?;
        Ok(Self { sock, server, log })
    }

    /// Sends `hello` and expects the server greeting back.
    ///
    /// # Errors
    /// I/O failure, timeout, or a reply other than the greeting.
    pub fn handshake(&self, hello: &str) -> Result<(), ClientError> {
        self.sock.send_to(hello.as_bytes(), self.server)?;
        self.expect_reply(GREETING)?;
        sink_info!(self.log, "handshake with {} complete", self.server);
        Ok(())
    }

    /// Encodes and sends one batch, then waits for the acknowledgment.
    ///
    /// # Errors
    /// I/O failure, timeout, or a reply other than the acknowledgment.
    pub fn send_batch(&self, records: &[SensorRecord]) -> Result<(), ClientError> {
        self.send_raw(&encode_batch(records))?;
        self.expect_reply(ACK)
    }

    /// Sends bytes as-is, without waiting for a reply.
    ///
    /// # Errors
    /// Socket send failure.
    pub fn send_raw(&self, bytes: &[u8]) -> Result<(), ClientError> {
        let n = self.sock.send_to(bytes, self.server)?;
        sink_debug!(self.log, "sent {} bytes to {}", n, self.server);
        Ok(())
    }

    /// Waits for the next datagram and checks it equals `expected`.
    ///
    /// # Errors
    /// I/O failure (including the read timeout) or a different payload.
    pub fn expect_reply(&self, expected: &[u8]) -> Result<(), ClientError> {
        let mut buf = [0u8; 256];
        let (n, _from) = self.sock.recv_from(&mut buf)?;
        if &buf[..n] != expected {
            return Err(ClientError::UnexpectedReply {
                expected: String::from_utf8_lossy(expected).into_owned(),
                got: String::from_utf8_lossy(&buf[..n]).into_owned(),
            });
        }
        Ok(())
    }
}

/// A plausible reading: accelerations within ±2 g, colors in 0..=255.
pub fn random_record<R: Rng + ?Sized>(rng: &mut R) -> SensorRecord {
    SensorRecord::new(
        rng.gen_range(-2.0 * G..=2.0 * G),
        rng.gen_range(-2.0 * G..=2.0 * G),
        rng.gen_range(-2.0 * G..=2.0 * G),
        rng.gen_range(0.0..=255.0),
        rng.gen_range(0.0..=255.0),
        rng.gen_range(0.0..=255.0),
    )
}

/// `n` random readings.
pub fn random_batch<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<SensorRecord> {
    (0..n).map(|_| random_record(rng)).collect()
}
