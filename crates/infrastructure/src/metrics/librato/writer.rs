use super::payload::{LibratoPayload, Measurement};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Librato rejects submissions with more measurements than this.
pub(super) const MAX_BATCH_SIZE: usize = 300;

pub(super) enum SinkMessage {
    Measurement(Measurement),
    Flush(oneshot::Sender<()>),
}

pub(super) struct LibratoClient {
    pub http: reqwest::Client,
    pub endpoint: String,
    pub user: String,
    pub token: String,
    pub source: String,
}

impl LibratoClient {
    async fn post(&self, payload: &LibratoPayload<'_>) -> Result<(), String> {
        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.user, Some(&self.token))
            .json(payload)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(format!("HTTP {}: {}", status, body));
        }

        Ok(())
    }
}

pub(super) async fn flush_loop(
    client: LibratoClient,
    mut receiver: mpsc::Receiver<SinkMessage>,
    flush_interval_ms: u64,
) {
    let mut batch: Vec<Measurement> = Vec::new();
    let mut flush_interval = tokio::time::interval(Duration::from_millis(flush_interval_ms));

    loop {
        tokio::select! {
            maybe_msg = receiver.recv() => {
                match maybe_msg {
                    Some(SinkMessage::Measurement(m)) => batch.push(m),
                    Some(SinkMessage::Flush(ack)) => {
                        flush_batch(&client, &mut batch).await;
                        let _ = ack.send(());
                    }
                    None => {
                        flush_batch(&client, &mut batch).await;
                        info!("Librato flush task shutting down");
                        return;
                    }
                }
            }
            _ = flush_interval.tick() => {
                flush_batch(&client, &mut batch).await;
            }
        }
    }
}

async fn flush_batch(client: &LibratoClient, batch: &mut Vec<Measurement>) {
    if batch.is_empty() {
        return;
    }

    let measure_time = chrono::Utc::now().timestamp();

    while !batch.is_empty() {
        let take = batch.len().min(MAX_BATCH_SIZE);
        let chunk: Vec<Measurement> = batch.drain(..take).collect();
        let payload = LibratoPayload::from_batch(&client.source, measure_time, chunk);
        let count = payload.len();

        match client.post(&payload).await {
            Ok(()) => debug!(count, "Metrics submitted"),
            Err(e) => warn!(error = %e, count, "Failed to submit metrics, dropping batch"),
        }
    }
}
