//! Packed little-endian wire layout for sensor batches.
//!
//! Each record is six IEEE-754 `f32` back to back, in [`Channel::ALL`] order,
//! with no padding; a batch is `n` records with no header. The layout is read
//! field by field so it never depends on in-memory struct layout.
//!
//! [`Channel::ALL`]: super::Channel::ALL

use byteorder::{ByteOrder, LittleEndian};

use super::{
    batch::Batch, constants::RECORD_SIZE, sensor_error::SensorError,
    sensor_record::SensorRecord,
};

/// Wire length of a batch of `records` records.
#[must_use]
pub const fn batch_len(records: usize) -> usize {
    records * RECORD_SIZE
}

/// Decodes exactly `expected_records` records from the front of `bytes`.
///
/// Trailing bytes past `expected_records * RECORD_SIZE` are ignored.
///
/// # Errors
/// - [`SensorError::InvalidBatchSize`] if `expected_records` is zero.
/// - [`SensorError::TruncatedBatch`] if `bytes` is too short; nothing is decoded.
pub fn decode_batch(bytes: &[u8], expected_records: usize) -> Result<Batch, SensorError> {
    if expected_records == 0 {
        return Err(SensorError::InvalidBatchSize {
            expected: 1,
            actual: 0,
        });
    }

    let need = batch_len(expected_records);
    if bytes.len() < need {
        return Err(SensorError::TruncatedBatch {
            expected_len: need,
            actual_len: bytes.len(),
        });
    }

    let records = bytes[..need]
        .chunks_exact(RECORD_SIZE)
        .map(decode_record)
        .collect();

    Batch::new(records, expected_records)
}

/// Reads one record from a `RECORD_SIZE`-byte chunk.
fn decode_record(chunk: &[u8]) -> SensorRecord {
    let mut v = [0f32; 6];
    LittleEndian::read_f32_into(&chunk[..RECORD_SIZE], &mut v);
    SensorRecord::from_array(v)
}

/// Encodes records in the wire layout.
#[must_use]
pub fn encode_batch(records: &[SensorRecord]) -> Vec<u8> {
    let mut out = vec![0u8; batch_len(records.len())];
    for (chunk, rec) in out.chunks_exact_mut(RECORD_SIZE).zip(records) {
        LittleEndian::write_f32_into(&rec.to_array(), chunk);
    }
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use crate::sensor::constants::DEFAULT_BATCH_SIZE;

    fn sample(n: usize) -> Vec<SensorRecord> {
        (0..n)
            .map(|i| {
                let f = i as f32;
                SensorRecord::new(f, -f, f * 0.5, 1e-7 * f, f32::MAX / (f + 1.0), -0.0)
            })
            .collect()
    }

    #[test]
    fn ten_records_are_240_bytes() {
        assert_eq!(batch_len(DEFAULT_BATCH_SIZE), 240);
        assert_eq!(encode_batch(&sample(DEFAULT_BATCH_SIZE)).len(), 240);
    }

    #[test]
    fn decode_exact_length_preserves_bits() {
        let recs = sample(DEFAULT_BATCH_SIZE);
        let bytes = encode_batch(&recs);

        let batch = decode_batch(&bytes, DEFAULT_BATCH_SIZE).expect("exact length decodes");
        assert_eq!(batch.len(), DEFAULT_BATCH_SIZE);
        for (got, want) in batch.records().iter().zip(&recs) {
            for (g, w) in got.to_array().iter().zip(want.to_array()) {
                assert_eq!(g.to_bits(), w.to_bits());
            }
        }
    }

    #[test]
    fn fields_are_little_endian_in_wire_order() {
        let rec = SensorRecord::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0);
        let bytes = encode_batch(&[rec]);
        assert_eq!(&bytes[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&bytes[12..16], &4.0f32.to_le_bytes());
        assert_eq!(&bytes[20..24], &6.0f32.to_le_bytes());
    }

    #[test]
    fn short_buffer_is_truncated_batch() {
        let bytes = encode_batch(&sample(DEFAULT_BATCH_SIZE));
        let err = decode_batch(&bytes[..239], DEFAULT_BATCH_SIZE).unwrap_err();
        assert_eq!(
            err,
            SensorError::TruncatedBatch {
                expected_len: 240,
                actual_len: 239
            }
        );

        let err = decode_batch(&[], DEFAULT_BATCH_SIZE).unwrap_err();
        assert!(matches!(err, SensorError::TruncatedBatch { actual_len: 0, .. }));
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let recs = sample(3);
        let mut bytes = encode_batch(&recs);
        bytes.extend_from_slice(&[0xAB; 17]);

        let batch = decode_batch(&bytes, 3).expect("longer buffer decodes");
        assert_eq!(batch.records(), recs.as_slice());
    }

    #[test]
    fn zero_records_is_rejected() {
        assert!(matches!(
            decode_batch(&[0u8; 24], 0),
            Err(SensorError::InvalidBatchSize { actual: 0, .. })
        ));
    }
}
