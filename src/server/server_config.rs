use std::{
    net::{IpAddr, SocketAddr},
    str::FromStr,
    time::Duration,
};

use crate::{
    config::Config,
    sensor::{constants::DEFAULT_BATCH_SIZE, sensor_codec::batch_len},
};

use super::{
    constants::{DEFAULT_BIND_ADDR, DEFAULT_PORT, DEFAULT_RECV_TIMEOUT, MAX_DATAGRAM},
    server_error::ServerError,
};

const SECTION: &str = "Server";

/// Resolved settings for the sensor server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Records per datagram (N).
    pub batch_size: usize,
    /// Read timeout on the socket; bounds how long shutdown can go unnoticed.
    /// `None` blocks indefinitely.
    pub recv_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            batch_size: DEFAULT_BATCH_SIZE,
            recv_timeout: Some(DEFAULT_RECV_TIMEOUT),
        }
    }
}

impl ServerConfig {
    /// Reads `[Server]` keys (`bind_addr`, `port`, `batch_size`,
    /// `recv_timeout_ms`), falling back to globals and then to defaults.
    ///
    /// `recv_timeout_ms = 0` disables the timeout.
    ///
    /// # Errors
    /// [`ServerError::Config`] for unparsable values, a zero batch size, or a
    /// batch that would not fit in one UDP datagram.
    pub fn from_config(config: &Config) -> Result<Self, ServerError> {
        let bind_addr: IpAddr = parse_key(config, "bind_addr", DEFAULT_BIND_ADDR)?;
        let port: u16 = parse_key(config, "port", &DEFAULT_PORT.to_string())?;
        let batch_size: usize = parse_key(config, "batch_size", &DEFAULT_BATCH_SIZE.to_string())?;
        let timeout_ms: u64 = parse_key(
            config,
            "recv_timeout_ms",
            &DEFAULT_RECV_TIMEOUT.as_millis().to_string(),
        )?;

        if batch_size == 0 {
            return Err(ServerError::Config("batch_size must be at least 1".into()));
        }
        if batch_len(batch_size) > MAX_DATAGRAM {
            return Err(ServerError::Config(format!(
                "batch_size {batch_size} needs {} bytes, more than one datagram ({MAX_DATAGRAM})",
                batch_len(batch_size)
            )));
        }

        Ok(Self {
            bind_addr,
            port,
            batch_size,
            recv_timeout: (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)),
        })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_key<T: FromStr>(config: &Config, key: &str, default: &str) -> Result<T, ServerError>
where
    T::Err: std::fmt::Display,
{
    let raw = config.get_or_default(SECTION, key, default);
    raw.parse::<T>()
        .map_err(|e| ServerError::Config(format!("[{SECTION}] {key} = {raw:?}: {e}")))
}
