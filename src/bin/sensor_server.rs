//! Sensor batch server.
//!
//! Usage:
//!   sensor_server              # sensor_server.conf, then server_default.conf, then defaults
//!   sensor_server [CONFIG]     # explicit config file

use std::sync::Arc;
use std::{env, process};

use sensorstats::config::Config;
use sensorstats::log::log_sink::LogSink;
use sensorstats::log::logger::Logger;
use sensorstats::server::run::run_sensor_server_with_log;
use sensorstats::server::shutdown::install_ctrl_c_handler;
use sensorstats::server::{ServerConfig, ShutdownToken};
use sensorstats::{sink_error, sink_info};

fn main() {
    let args: Vec<String> = env::args().collect();

    let config_result = match args.len() {
        1 => Config::load("sensor_server.conf").or_else(|_| Config::load("server_default.conf")),
        2 => Config::load(&args[1]),
        _ => {
            eprintln!("Usage:");
            eprintln!("  {}            # sensor_server.conf / server_default.conf", args[0]);
            eprintln!("  {} [CONFIG]   # e.g. server_default.conf", args[0]);
            process::exit(1);
        }
    };

    let config = config_result.unwrap_or_else(|e| {
        eprintln!("Error loading config: {e}. Using defaults.");
        Config::empty()
    });

    let server_config = match ServerConfig::from_config(&config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[sensor_server] {e}");
            process::exit(1);
        }
    };

    // --- Start process logger ----------------------------------------------
    let logger = Logger::start_server(1024, &config);
    let log_sink: Arc<dyn LogSink> = Arc::new(logger.handle());

    let shutdown = ShutdownToken::new();
    if let Err(e) = install_ctrl_c_handler(&shutdown) {
        eprintln!("[sensor_server] {e}");
        process::exit(1);
    }

    eprintln!(
        "[sensor_server] listening on {} (log: {})",
        server_config.socket_addr(),
        logger.file_path().display()
    );

    // --- Run session (blocks until Ctrl-C) ---------------------------------
    let result = run_sensor_server_with_log(&server_config, shutdown, Arc::clone(&log_sink));

    let code = match result {
        Ok(stats) => {
            sink_info!(log_sink, "shutting down: {}", stats);
            eprintln!("\n[sensor_server] stopped: {stats}");
            0
        }
        Err(e) => {
            sink_error!(log_sink, "fatal: {}", e);
            eprintln!("[sensor_server] {e}");
            1
        }
    };

    drop(log_sink);
    logger.shutdown();
    process::exit(code);
}
