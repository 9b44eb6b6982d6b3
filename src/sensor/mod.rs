pub mod batch;
pub mod channel;
pub mod constants;
pub mod sensor_codec;
pub mod sensor_error;
pub mod sensor_record;

pub use batch::Batch;
pub use channel::Channel;
pub use sensor_error::SensorError;
pub use sensor_record::SensorRecord;
