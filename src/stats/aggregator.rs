//! Per-batch summary statistics.
//!
//! Every channel is reduced independently in two passes: extrema and sum first,
//! then the squared deviations from the mean. Extrema are seeded from the first
//! record rather than from infinities, so a one-record batch has
//! `min == max == value`. Sums are accumulated in `f64` and narrowed at the
//! end; this keeps `min <= mean <= max` for finite input and makes a batch of
//! identical records produce exactly that value with a zero deviation.

use crate::sensor::{Channel, SensorError, SensorRecord, constants::CHANNEL_COUNT};

use super::{channel_statistics::ChannelStatistics, channel_summary::ChannelSummary};

/// Summarizes `batch`, which must hold exactly `expected` records.
///
/// # Errors
/// [`SensorError::InvalidBatchSize`] if `batch.len() != expected` or `expected == 0`.
pub fn compute_statistics(
    batch: &[SensorRecord],
    expected: usize,
) -> Result<ChannelStatistics, SensorError> {
    if expected == 0 || batch.len() != expected {
        return Err(SensorError::InvalidBatchSize {
            expected,
            actual: batch.len(),
        });
    }
    Ok(summarize(batch))
}

/// Summarizes a batch whose length was already validated.
pub(crate) fn summarize(records: &[SensorRecord]) -> ChannelStatistics {
    let mut summaries = [ChannelSummary::default(); CHANNEL_COUNT];
    if records.is_empty() {
        return ChannelStatistics::new(0, summaries);
    }
    for ch in Channel::ALL {
        summaries[ch.index()] = summarize_channel(records, ch);
    }
    ChannelStatistics::new(records.len(), summaries)
}

fn summarize_channel(records: &[SensorRecord], ch: Channel) -> ChannelSummary {
    let first = records.first().map_or(0.0, |r| r.get(ch));
    let mut min = first;
    let mut max = first;
    let mut sum = 0.0f64;

    for r in records {
        let v = r.get(ch);
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
        sum += f64::from(v);
    }

    let n = records.len() as f64;
    let mean = sum / n;

    let sq_dev: f64 = records
        .iter()
        .map(|r| {
            let d = f64::from(r.get(ch)) - mean;
            d * d
        })
        .sum();

    ChannelSummary {
        mean: mean as f32,
        min,
        max,
        std_dev: (sq_dev / n).sqrt() as f32,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-4 * b.abs().max(1.0)
    }

    #[test]
    fn accel_x_one_to_ten() {
        let recs: Vec<_> = (1..=10)
            .map(|i| SensorRecord::new(i as f32, 0.0, 0.0, 0.0, 0.0, 0.0))
            .collect();
        let stats = compute_statistics(&recs, 10).expect("ten records");

        let ax = stats.get(Channel::AccelX);
        assert_eq!(ax.mean, 5.5);
        assert_eq!(ax.min, 1.0);
        assert_eq!(ax.max, 10.0);
        assert!(close(ax.std_dev, 2.8723), "std_dev = {}", ax.std_dev);

        for ch in &Channel::ALL[1..] {
            assert_eq!(stats.get(*ch), ChannelSummary::default(), "{ch}");
        }
    }

    #[test]
    fn identical_records_have_zero_spread() {
        let rec = SensorRecord::new(0.1, -9.81, 3.3, 255.0, 0.7, 1e-3);
        let recs = vec![rec; 10];
        let stats = compute_statistics(&recs, 10).expect("ten records");

        for ch in Channel::ALL {
            let s = stats.get(ch);
            let v = rec.get(ch);
            assert_eq!(s.mean, v, "{ch} mean");
            assert_eq!(s.min, v, "{ch} min");
            assert_eq!(s.max, v, "{ch} max");
            assert_eq!(s.std_dev, 0.0, "{ch} std_dev");
        }
    }

    #[test]
    fn single_record_batch() {
        let rec = SensorRecord::new(1.5, -2.0, 0.0, 10.0, 20.0, 30.0);
        let stats = compute_statistics(&[rec], 1).expect("one record");
        assert_eq!(stats.count(), 1);
        for ch in Channel::ALL {
            let s = stats.get(ch);
            assert_eq!((s.mean, s.min, s.max, s.std_dev), (rec.get(ch), rec.get(ch), rec.get(ch), 0.0));
        }
    }

    #[test]
    fn min_mean_max_are_ordered_for_random_batches() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for _ in 0..200 {
            let recs: Vec<_> = (0..10)
                .map(|_| {
                    let mut v = [0f32; 6];
                    for x in &mut v {
                        *x = rng.gen_range(-1e6f32..1e6f32);
                    }
                    SensorRecord::from_array(v)
                })
                .collect();
            let stats = compute_statistics(&recs, 10).expect("ten records");
            for ch in Channel::ALL {
                let s = stats.get(ch);
                assert!(s.min <= s.mean && s.mean <= s.max, "{ch}: {s:?}");
                assert!(s.std_dev >= 0.0);
            }
        }
    }

    #[test]
    fn std_dev_ignores_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut recs: Vec<_> = (0..10)
            .map(|_| {
                SensorRecord::new(
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(0.0..255.0),
                    rng.gen_range(0.0..255.0),
                    rng.gen_range(0.0..255.0),
                )
            })
            .collect();
        let before = compute_statistics(&recs, 10).expect("ten records");
        recs.reverse();
        recs.shuffle(&mut rng);
        let after = compute_statistics(&recs, 10).expect("ten records");

        for ch in Channel::ALL {
            assert!(close(before.get(ch).std_dev, after.get(ch).std_dev), "{ch}");
            assert_eq!(before.get(ch).min, after.get(ch).min);
            assert_eq!(before.get(ch).max, after.get(ch).max);
        }
    }

    #[test]
    fn wrong_length_is_invalid_batch_size() {
        let recs = vec![SensorRecord::default(); 9];
        assert_eq!(
            compute_statistics(&recs, 10).unwrap_err(),
            SensorError::InvalidBatchSize {
                expected: 10,
                actual: 9
            }
        );
        assert!(compute_statistics(&[], 0).is_err());
    }
}
