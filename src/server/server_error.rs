use std::{fmt, io, net::SocketAddr};

#[derive(Debug)]
pub enum ServerError {
    /// Socket could not be bound to the configured address.
    Bind { addr: SocketAddr, source: io::Error },
    /// Receive or send failed at the socket layer.
    Transport(io::Error),
    /// Configuration value missing or out of range.
    Config(String),
    /// Ctrl-C handler could not be installed.
    Signal(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ServerError::*;
        match self {
            Bind { addr, source } => write!(f, "bind {addr} failed: {source}"),
            Transport(e) => write!(f, "transport error: {e}"),
            Config(s) => write!(f, "config error: {s}"),
            Signal(s) => write!(f, "signal handler error: {s}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Bind { source, .. } => Some(source),
            ServerError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ServerError {
    fn from(e: io::Error) -> Self {
        ServerError::Transport(e)
    }
}
