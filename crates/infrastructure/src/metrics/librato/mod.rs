//! Metrics sink for the Librato (AppOptics legacy) HTTP API.
//!
//! Measurements are queued on a bounded channel and posted in batches by a
//! background task, so callers never wait on the network.

mod payload;
mod writer;

use async_trait::async_trait;
use payload::{Measurement, MeasurementKind};
use soa_monitor_application::ports::MetricsSink;
use soa_monitor_domain::config::LibratoConfig;
use soa_monitor_domain::DomainError;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info, warn};
use writer::{LibratoClient, SinkMessage};

const CHANNEL_CAPACITY: usize = 4096;
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub struct LibratoSink {
    sender: mpsc::Sender<SinkMessage>,
}

impl LibratoSink {
    /// Spawns the batching task; must be called inside a tokio runtime.
    pub fn new(config: &LibratoConfig, source: String) -> Result<Self, DomainError> {
        let (user, token) = match (&config.user, &config.token) {
            (Some(user), Some(token)) if config.is_enabled() => (user.clone(), token.clone()),
            _ => {
                return Err(DomainError::ConfigError(
                    "Librato sink requires both user and token".to_string(),
                ))
            }
        };

        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| DomainError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        let flush_interval_ms = config.flush_interval_ms.max(1);
        let client = LibratoClient {
            http,
            endpoint: config.endpoint.clone(),
            user,
            token,
            source,
        };

        info!(
            endpoint = %client.endpoint,
            source = %client.source,
            flush_interval_ms,
            "Librato metrics enabled"
        );

        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);
        tokio::spawn(writer::flush_loop(client, receiver, flush_interval_ms));

        Ok(Self { sender })
    }

    fn enqueue(&self, kind: MeasurementKind, name: &str, value: i64) {
        let measurement = Measurement {
            kind,
            name: name.to_string(),
            value,
        };

        match self.sender.try_send(SinkMessage::Measurement(measurement)) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(metric = name, "Metrics channel full, dropping measurement");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                error!(metric = name, "Metrics channel closed");
            }
        }
    }
}

#[async_trait]
impl MetricsSink for LibratoSink {
    fn gauge(&self, name: &str, value: i64) {
        self.enqueue(MeasurementKind::Gauge, name, value);
    }

    fn counter(&self, name: &str, value: i64) {
        self.enqueue(MeasurementKind::Counter, name, value);
    }

    async fn flush(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.sender.send(SinkMessage::Flush(ack_tx)).await.is_err() {
            return;
        }
        let _ = ack_rx.await;
    }
}
