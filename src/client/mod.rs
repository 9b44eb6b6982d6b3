pub mod client_error;
pub mod sensor_client;

pub use client_error::ClientError;
pub use sensor_client::SensorClient;
