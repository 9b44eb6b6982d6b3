//! UDP sensor-batch listener.
//!
//! A client sends a text greeting, the server greets it, and from then on every
//! datagram carries a fixed number of six-channel sensor readings. For each
//! batch the server computes per-channel mean, min, max and population
//! standard deviation, prints them, and acknowledges the datagram.
//!
//! Two binaries are provided:
//! - `sensor_server`: the listener.
//! - `sensor_client`: streams synthetic batches to a server.

/// Companion client that performs the handshake and streams batches.
pub mod client;
/// Handles configuration loading and management.
pub mod config;
/// Logging utilities for the application.
pub mod log;
/// Sensor records, batches and their wire codec.
pub mod sensor;
/// Transport, shutdown and the receive/aggregate/acknowledge session loop.
pub mod server;
/// Per-batch summary statistics and their reporting.
pub mod stats;
