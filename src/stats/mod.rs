pub mod aggregator;
pub mod channel_statistics;
pub mod channel_summary;
pub mod stats_sink;

pub use aggregator::compute_statistics;
pub use channel_statistics::ChannelStatistics;
pub use channel_summary::ChannelSummary;
pub use stats_sink::{ConsoleStatsSink, StatsSink};
