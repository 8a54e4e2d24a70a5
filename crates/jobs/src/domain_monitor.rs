use soa_monitor_application::ports::ErrorContext;
use soa_monitor_application::use_cases::{PollDomainUseCase, PollState};
use soa_monitor_domain::MonitorTarget;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;

/// Perpetual poll loop for one zone: poll, evaluate, report, sleep.
///
/// Cycles never overlap. The sleep starts after a cycle completes, so the
/// effective period is the interval plus the cycle's own duration.
pub struct DomainMonitorJob {
    poll: Arc<PollDomainUseCase>,
    target: MonitorTarget,
    interval: Duration,
    remember_max_serial: bool,
    shutdown: CancellationToken,
}

impl DomainMonitorJob {
    pub fn new(poll: Arc<PollDomainUseCase>, target: MonitorTarget) -> Self {
        Self {
            poll,
            target,
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            remember_max_serial: false,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_remember_max_serial(mut self, enabled: bool) -> Self {
        self.remember_max_serial = enabled;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn target(&self) -> &MonitorTarget {
        &self.target
    }

    pub fn job_name(&self) -> String {
        format!("domain_monitor:{}", self.target.zone)
    }

    pub fn error_context(&self) -> ErrorContext {
        ErrorContext::zone(&self.target().zone).with_job(&self.job_name())
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            domain = %self.target.zone,
            primaries = self.target.primaries.len(),
            secondaries = self.target.secondaries.len(),
            interval_secs = self.interval.as_secs(),
            "Starting domain monitor"
        );

        let mut state = PollState::new(self.remember_max_serial);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                result = self.poll.execute(&self.target, &mut state) => {
                    // Failures were already logged and counted by the use case.
                    if let Ok(report) = result {
                        debug!(
                            domain = %self.target.zone,
                            reference_primary = %report.reference_primary,
                            max_serial = report.max_serial.value(),
                            max_lag_seconds = report.max_lag,
                            "Poll cycle completed"
                        );
                    }
                }
            }

            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!(domain = %self.target.zone, "DomainMonitorJob: shutting down");
    }
}
