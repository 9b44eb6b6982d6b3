use std::fmt;

use crate::sensor::{Channel, SensorRecord, constants::CHANNEL_COUNT};

use super::channel_summary::ChannelSummary;

const RULE: &str =
    "-------------------------------------------------------------------------------------------------";

/// Mean/min/max/std-dev for every channel of one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelStatistics {
    count: usize,
    summaries: [ChannelSummary; CHANNEL_COUNT],
}

impl ChannelStatistics {
    pub(crate) fn new(count: usize, summaries: [ChannelSummary; CHANNEL_COUNT]) -> Self {
        Self { count, summaries }
    }

    /// Number of records the statistics were computed over.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn get(&self, channel: Channel) -> ChannelSummary {
        self.summaries[channel.index()]
    }

    #[must_use]
    pub fn mean(&self) -> SensorRecord {
        self.project(|s| s.mean)
    }

    #[must_use]
    pub fn min(&self) -> SensorRecord {
        self.project(|s| s.min)
    }

    #[must_use]
    pub fn max(&self) -> SensorRecord {
        self.project(|s| s.max)
    }

    #[must_use]
    pub fn std_dev(&self) -> SensorRecord {
        self.project(|s| s.std_dev)
    }

    fn project(&self, f: impl Fn(&ChannelSummary) -> f32) -> SensorRecord {
        let mut v = [0f32; CHANNEL_COUNT];
        for (out, s) in v.iter_mut().zip(&self.summaries) {
            *out = f(s);
        }
        SensorRecord::from_array(v)
    }
}

/// Console report: one line per statistic, all six channels, two decimals.
impl fmt::Display for ChannelStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        write_line(f, "Mean Sensor data", &self.mean())?;
        write_line(f, "Maximum Sensor data", &self.max())?;
        write_line(f, "Minimum Sensor data", &self.min())?;
        write_line(f, "Standard deviation of Sensor data", &self.std_dev())?;
        writeln!(f, "{RULE}")
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, label: &str, rec: &SensorRecord) -> fmt::Result {
    write!(f, "{label}:")?;
    for (i, ch) in Channel::ALL.iter().enumerate() {
        let sep = if i == 0 { " " } else { ", " };
        write!(f, "{sep}{}={:.2}", ch.name(), rec.get(*ch))?;
    }
    writeln!(f)
}
