use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// Datagram shorter than `batch_size * RECORD_SIZE`.
    TruncatedBatch { expected_len: usize, actual_len: usize },
    /// Record count differs from the configured batch size (or is zero).
    InvalidBatchSize { expected: usize, actual: usize },
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SensorError::*;
        match self {
            TruncatedBatch {
                expected_len,
                actual_len,
            } => write!(
                f,
                "truncated batch: expected {expected_len} bytes, got {actual_len}"
            ),
            InvalidBatchSize { expected, actual } => write!(
                f,
                "invalid batch size: expected {expected} records, got {actual}"
            ),
        }
    }
}

impl std::error::Error for SensorError {}
