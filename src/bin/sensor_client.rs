//! Streams random sensor batches to a running `sensor_server`.
//!
//! Usage:
//!   sensor_client                       # 127.0.0.1:8888, 10 batches
//!   sensor_client [ADDR]                # e.g. 192.168.1.41:8888
//!   sensor_client [ADDR] [BATCHES]
//!   sensor_client [ADDR] [BATCHES] [BATCH_SIZE]
//!
//! Without `BATCH_SIZE`, records per batch come from `[Server] batch_size`
//! in `server_default.conf` (default 10).

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use std::{env, process, thread};

use sensorstats::client::SensorClient;
use sensorstats::client::sensor_client::random_batch;
use sensorstats::config::Config;
use sensorstats::log::log_sink::LogSink;
use sensorstats::log::logger::Logger;
use sensorstats::server::ServerConfig;
use sensorstats::{sink_info, sink_warn};

const DEFAULT_SERVER: &str = "127.0.0.1:8888";
/// Same `[Server] batch_size` the server reads, so both sides agree on N.
const CONFIG_PATH: &str = "server_default.conf";
const SEND_INTERVAL: Duration = Duration::from_secs(1);
const REPLY_TIMEOUT: Duration = Duration::from_secs(2);

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    server: SocketAddr,
    batches: u32,
    batch_size: usize,
}

/// `args` excludes the program name.
fn parse_args(args: &[String]) -> Result<Args, String> {
    if args.len() > 3 {
        return Err("too many arguments".into());
    }
    let addr = args.first().map_or(DEFAULT_SERVER, String::as_str);
    let batches = args.get(1).map_or("10", String::as_str);

    let server = addr
        .parse::<SocketAddr>()
        .map_err(|e| format!("invalid address {addr:?}: {e}"))?;
    let batches = batches
        .parse::<u32>()
        .map_err(|e| format!("invalid batch count {batches:?}: {e}"))?;
    let batch_size = match args.get(2) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return Err(format!("invalid batch size {raw:?}")),
        },
        None => {
            let config = Config::load(CONFIG_PATH).unwrap_or_else(|_| Config::empty());
            ServerConfig::from_config(&config)
                .map_err(|e| e.to_string())?
                .batch_size
        }
    };
    Ok(Args {
        server,
        batches,
        batch_size,
    })
}

fn main() {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map_or("sensor_client", String::as_str);
    let args = match parse_args(argv.get(1..).unwrap_or_default()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: {program} [ADDR] [BATCHES] [BATCH_SIZE]");
            process::exit(1);
        }
    };

    let logger = Logger::start_client(256, &Config::empty());
    let log_sink: Arc<dyn LogSink> = Arc::new(logger.handle());

    let code = match stream(&args, Arc::clone(&log_sink)) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("[sensor_client] {e}");
            1
        }
    };

    drop(log_sink);
    logger.shutdown();
    process::exit(code);
}

fn stream(args: &Args, log: Arc<dyn LogSink>) -> Result<(), sensorstats::client::ClientError> {
    let server = args.server;
    let client = SensorClient::connect(server, REPLY_TIMEOUT, Arc::clone(&log))?;
    client.handshake("hello from client")?;
    eprintln!("[sensor_client] connected to {server}");

    let mut rng = rand::thread_rng();
    for i in 1..=args.batches {
        let batch = random_batch(&mut rng, args.batch_size);
        match client.send_batch(&batch) {
            Ok(()) => sink_info!(log, "batch {} acknowledged", i),
            Err(e) => sink_warn!(log, "batch {} not acknowledged: {}", i, e),
        }
        thread::sleep(SEND_INTERVAL);
    }
    Ok(())
}
