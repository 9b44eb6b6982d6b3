use std::time::Duration;

/// Reply to the client's first datagram.
pub const GREETING: &[u8] = b"hello from server";
/// Reply to every accepted sensor batch.
pub const ACK: &[u8] = b"Server got sensor data!";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8888;
pub const DEFAULT_RECV_TIMEOUT: Duration = Duration::from_millis(500);

/// Receive buffer for the handshake message.
pub const HANDSHAKE_BUF_SIZE: usize = 256;
/// Minimum receive buffer for sensor datagrams; grown to fit larger batches.
pub const RECV_BUF_SIZE: usize = 1024;
/// Largest UDP payload over IPv4.
pub const MAX_DATAGRAM: usize = 65_507;
