pub mod constants;
#[cfg(test)]
mod memory_transport;
pub mod run;
pub mod server_config;
pub mod server_error;
pub mod session;
pub mod session_state;
pub mod session_stats;
pub mod shutdown;
pub mod transport;

pub use server_config::ServerConfig;
pub use server_error::ServerError;
pub use session::SensorSession;
pub use session_stats::SessionStats;
pub use shutdown::ShutdownToken;
pub use transport::{DatagramTransport, UdpTransport};
