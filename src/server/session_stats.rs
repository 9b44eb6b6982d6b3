use std::fmt;

/// Counters kept over one session, reported at shutdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Batches decoded, reported and acknowledged.
    pub batches_processed: u64,
    /// Datagrams dropped because they did not decode.
    pub batches_rejected: u64,
    /// Receive calls that failed for reasons other than a timeout.
    pub recv_errors: u64,
    /// Datagrams that arrived from an address other than the tracked peer.
    pub foreign_datagrams: u64,
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "processed={} rejected={} recv_errors={} foreign={}",
            self.batches_processed, self.batches_rejected, self.recv_errors, self.foreign_datagrams
        )
    }
}
