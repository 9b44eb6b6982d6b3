/// Four statistics of one channel over one batch.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelSummary {
    pub mean: f32,
    pub min: f32,
    pub max: f32,
    /// Population standard deviation (divides by N).
    pub std_dev: f32,
}
