use super::{sensor_error::SensorError, sensor_record::SensorRecord};
use crate::stats::{aggregator, channel_statistics::ChannelStatistics};

/// The records carried by one datagram. Length is checked on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    records: Vec<SensorRecord>,
}

impl Batch {
    /// Wraps `records`, requiring exactly `expected` of them and `expected >= 1`.
    ///
    /// # Errors
    /// [`SensorError::InvalidBatchSize`] on a count mismatch or an empty batch.
    pub fn new(records: Vec<SensorRecord>, expected: usize) -> Result<Self, SensorError> {
        if expected == 0 || records.len() != expected {
            return Err(SensorError::InvalidBatchSize {
                expected,
                actual: records.len(),
            });
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[SensorRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false: a `Batch` holds at least one record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Per-channel mean/min/max/std-dev of this batch.
    #[must_use]
    pub fn statistics(&self) -> ChannelStatistics {
        aggregator::summarize(&self.records)
    }
}
