use std::sync::Arc;

use crate::log::log_sink::LogSink;
use crate::stats::ConsoleStatsSink;

use super::{
    server_config::ServerConfig, server_error::ServerError, session::SensorSession,
    session_stats::SessionStats, shutdown::ShutdownToken, transport::UdpTransport,
};

/// Bind the configured UDP address and run the session until `shutdown`,
/// printing each batch report to stdout.
///
/// The socket is closed when this returns.
pub fn run_sensor_server_with_log(
    config: &ServerConfig,
    shutdown: ShutdownToken,
    log: Arc<dyn LogSink>,
) -> Result<SessionStats, ServerError> {
    let transport = UdpTransport::bind(config.socket_addr(), config.recv_timeout)?;
    let mut session = SensorSession::new(
        transport,
        config.batch_size,
        shutdown,
        Arc::clone(&log),
        Box::new(ConsoleStatsSink::new(log)),
    );
    session.run()
}

