//! In-memory [`DatagramTransport`] for session tests.

use std::{
    collections::VecDeque,
    io,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use super::{shutdown::ShutdownToken, transport::DatagramTransport};

/// Scripted inbound datagrams; every outbound datagram is recorded.
///
/// When the script runs dry it cancels `shutdown` and reports a timeout, which
/// is how tests end the session loop.
pub(crate) struct MemoryTransport {
    pub inbound: VecDeque<io::Result<(Vec<u8>, SocketAddr)>>,
    pub sent: Arc<Mutex<Vec<(Vec<u8>, SocketAddr)>>>,
    pub shutdown: ShutdownToken,
    /// Sends fail once this many datagrams have been sent.
    pub fail_after: Option<usize>,
}

impl MemoryTransport {
    pub fn new(shutdown: ShutdownToken) -> Self {
        Self {
            inbound: VecDeque::new(),
            sent: Arc::new(Mutex::new(Vec::new())),
            shutdown,
            fail_after: None,
        }
    }

    pub fn push(&mut self, bytes: &[u8], from: SocketAddr) {
        self.inbound.push_back(Ok((bytes.to_vec(), from)));
    }

    pub fn push_err(&mut self, kind: io::ErrorKind) {
        self.inbound.push_back(Err(io::Error::from(kind)));
    }
}

impl DatagramTransport for MemoryTransport {
    fn recv_from(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        match self.inbound.pop_front() {
            Some(Ok((bytes, from))) => {
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                Ok((n, from))
            }
            Some(Err(e)) => Err(e),
            None => {
                self.shutdown.cancel();
                Err(io::Error::from(io::ErrorKind::WouldBlock))
            }
        }
    }

    fn send_to(&mut self, buf: &[u8], peer: SocketAddr) -> io::Result<usize> {
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| io::Error::other("sent log poisoned"))?;
        if self.fail_after.is_some_and(|n| sent.len() >= n) {
            return Err(io::Error::from(io::ErrorKind::ConnectionRefused));
        }
        sent.push((buf.to_vec(), peer));
        Ok(buf.len())
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        Ok(SocketAddr::from(([127, 0, 0, 1], 8888)))
    }
}
