use std::net::SocketAddr;

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No datagram seen yet.
    AwaitingHandshake,
    /// Greeting sent; batches from `peer` are aggregated and acknowledged.
    Streaming { peer: SocketAddr },
    /// Shutdown observed; no further receives.
    Closed,
}

impl SessionState {
    #[must_use]
    pub fn peer(&self) -> Option<SocketAddr> {
        match self {
            SessionState::Streaming { peer } => Some(*peer),
            _ => None,
        }
    }
}
