#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use sensorstats::client::{ClientError, SensorClient};
use sensorstats::log::NoopLogSink;
use sensorstats::sensor::{Channel, SensorRecord, constants::DEFAULT_BATCH_SIZE, sensor_codec};
use sensorstats::server::{
    DatagramTransport, SensorSession, ShutdownToken, UdpTransport, session_state::SessionState,
};
use sensorstats::stats::{ChannelStatistics, StatsSink};

#[derive(Clone, Default)]
struct Collect(Arc<Mutex<Vec<ChannelStatistics>>>);

impl StatsSink for Collect {
    fn report(&self, _batch_no: u64, stats: &ChannelStatistics) {
        if let Ok(mut v) = self.0.lock() {
            v.push(stats.clone());
        }
    }
}

#[test]
fn client_and_server_over_loopback() {
    let transport = UdpTransport::bind(
        "127.0.0.1:0".parse().unwrap(),
        Some(Duration::from_millis(20)),
    )
    .expect("bind loopback");
    let server_addr: SocketAddr = transport.local_addr().expect("local addr");

    let shutdown = ShutdownToken::new();
    let collected = Collect::default();

    let server = {
        let shutdown = shutdown.clone();
        let sink = collected.clone();
        thread::spawn(move || {
            let mut session = SensorSession::new(
                transport,
                DEFAULT_BATCH_SIZE,
                shutdown,
                Arc::new(NoopLogSink),
                Box::new(sink),
            );
            let stats = session.run();
            (stats, session.state())
        })
    };

    let client = SensorClient::connect(server_addr, Duration::from_secs(2), Arc::new(NoopLogSink))
        .expect("client socket");
    client.handshake("hello from client").expect("greeting");

    // accel_x = 1..=10, everything else zero.
    let ramp: Vec<_> = (1..=10)
        .map(|i| SensorRecord::new(i as f32, 0.0, 0.0, 0.0, 0.0, 0.0))
        .collect();
    client.send_batch(&ramp).expect("ack for first batch");

    let flat = vec![SensorRecord::new(0.5, 1.5, -9.8, 10.0, 20.0, 30.0); DEFAULT_BATCH_SIZE];
    client.send_batch(&flat).expect("ack for second batch");

    // A short datagram is dropped silently: no ack arrives.
    let short = sensor_codec::encode_batch(&ramp[..5]);
    client.send_raw(&short).expect("send short datagram");
    match client.expect_reply(b"Server got sensor data!") {
        Err(ClientError::Io(_)) => {}
        other => panic!("truncated batch must not be acknowledged, got {other:?}"),
    }

    shutdown.cancel();
    let (result, state) = server.join().expect("server thread");
    let stats = result.expect("session ends cleanly");

    assert_eq!(stats.batches_processed, 2);
    assert_eq!(stats.batches_rejected, 1);
    assert_eq!(state, SessionState::Closed);

    let reports = collected.0.lock().expect("reports");
    assert_eq!(reports.len(), 2);

    let ax = reports[0].get(Channel::AccelX);
    assert_eq!((ax.mean, ax.min, ax.max), (5.5, 1.0, 10.0));
    assert!((ax.std_dev - 2.872_281).abs() < 1e-4);
    for ch in [Channel::AccelY, Channel::AccelZ, Channel::Red, Channel::Green, Channel::Blue] {
        assert_eq!(reports[0].get(ch).std_dev, 0.0);
        assert_eq!(reports[0].get(ch).mean, 0.0);
    }

    for ch in Channel::ALL {
        let s = reports[1].get(ch);
        assert_eq!(s.mean, flat[0].get(ch));
        assert_eq!(s.std_dev, 0.0);
    }
}
