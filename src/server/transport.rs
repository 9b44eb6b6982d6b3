use std::{
    io,
    net::{SocketAddr, UdpSocket},
    time::Duration,
};

use super::server_error::ServerError;

/// Blocking datagram endpoint used by the session loop.
///
/// `recv_from` may return `WouldBlock`/`TimedOut` when a read timeout elapses;
/// the session treats that as "nothing yet" and re-checks for shutdown.
pub trait DatagramTransport {
    fn recv_from(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)>;
    fn send_to(&mut self, buf: &[u8], peer: SocketAddr) -> io::Result<usize>;
    fn local_addr(&self) -> io::Result<SocketAddr>;
}

/// `std::net::UdpSocket` in blocking mode with an optional read timeout.
#[derive(Debug)]
pub struct UdpTransport {
    sock: UdpSocket,
}

impl UdpTransport {
    /// Binds `addr` and sets the read timeout.
    ///
    /// # Errors
    /// [`ServerError::Bind`] if binding fails, [`ServerError::Transport`] if the
    /// socket options cannot be applied.
    pub fn bind(addr: SocketAddr, recv_timeout: Option<Duration>) -> Result<Self, ServerError> {
        let sock = UdpSocket::bind(addr).map_err(|source| ServerError::Bind { addr, source })?;
        sock.set_nonblocking(false)?;
        sock.set_read_timeout(recv_timeout)?;
        Ok(Self { sock })
    }
}

impl DatagramTransport for UdpTransport {
    fn recv_from(&mut self, buf: &mut [u8]) -> io::Result<(usize, SocketAddr)> {
        self.sock.recv_from(buf)
    }

    fn send_to(&mut self, buf: &[u8], peer: SocketAddr) -> io::Result<usize> {
        self.sock.send_to(buf, peer)
    }

    fn local_addr(&self) -> io::Result<SocketAddr> {
        self.sock.local_addr()
    }
}

/// True for the errors a read timeout produces (platform dependent).
pub(crate) fn is_timeout(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut | io::ErrorKind::Interrupted
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use std::time::Instant;

    #[test]
    fn bind_reports_address_in_use() {
        let first = UdpTransport::bind("127.0.0.1:0".parse().unwrap(), None).expect("bind");
        let taken = first.local_addr().expect("local addr");

        match UdpTransport::bind(taken, None) {
            Err(ServerError::Bind { addr, .. }) => assert_eq!(addr, taken),
            other => panic!("expected Bind error, got {other:?}"),
        }
    }

    #[test]
    fn recv_times_out() {
        let mut t = UdpTransport::bind(
            "127.0.0.1:0".parse().unwrap(),
            Some(Duration::from_millis(30)),
        )
        .expect("bind");
        let mut buf = [0u8; 8];
        let start = Instant::now();
        let err = t.recv_from(&mut buf).unwrap_err();
        assert!(is_timeout(&err), "unexpected error kind {:?}", err.kind());
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
