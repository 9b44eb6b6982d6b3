/// Records per datagram when nothing else is configured.
pub const DEFAULT_BATCH_SIZE: usize = 10;
/// Number of `f32` channels in one record.
pub const CHANNEL_COUNT: usize = 6;
/// Packed wire size of one record: six little-endian `f32`.
pub const RECORD_SIZE: usize = CHANNEL_COUNT * 4;
