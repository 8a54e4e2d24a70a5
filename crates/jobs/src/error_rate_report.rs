use soa_monitor_application::ports::ErrorContext;
use soa_monitor_application::services::{ErrorRateCounter, MetricsPublisher};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

const DEFAULT_REPORT_INTERVAL_SECS: u64 = 60;

/// Periodically pushes the error counter to the metrics sink. Read-only with
/// respect to the counter.
pub struct ErrorRateReportJob {
    counter: Arc<ErrorRateCounter>,
    publisher: Arc<MetricsPublisher>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl ErrorRateReportJob {
    pub fn new(counter: Arc<ErrorRateCounter>, publisher: Arc<MetricsPublisher>) -> Self {
        Self {
            counter,
            publisher,
            interval: Duration::from_secs(DEFAULT_REPORT_INTERVAL_SECS),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn job_name(&self) -> String {
        "error_rate_report".to_string()
    }

    pub fn error_context(&self) -> ErrorContext {
        ErrorContext::job(&self.job_name())
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval.as_secs(),
            window_secs = self.counter.window().as_secs(),
            "Starting error rate reporting"
        );

        let mut interval = tokio::time::interval(self.interval);
        // The first tick completes immediately; skip it so the first report
        // covers a full period.
        interval.tick().await;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("ErrorRateReportJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    self.publisher
                        .publish_error_rate(self.counter.rate(), self.counter.total());
                }
            }
        }
    }
}
