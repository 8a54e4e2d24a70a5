use crate::ports::ErrorContext;
use crate::services::{ErrorReporter, LagEvaluator, MetricsPublisher, SerialWatermark};
use crate::use_cases::CollectSerialsUseCase;
use soa_monitor_domain::{DomainError, LagReport, MonitorTarget};
use std::sync::Arc;
use tracing::info;

/// State a zone's monitor carries from one cycle to the next.
#[derive(Debug, Default)]
pub struct PollState {
    remember_max_serial: bool,
    watermark: Option<SerialWatermark>,
}

impl PollState {
    pub fn new(remember_max_serial: bool) -> Self {
        Self {
            remember_max_serial,
            watermark: None,
        }
    }

    pub fn watermark(&self) -> Option<&SerialWatermark> {
        self.watermark.as_ref()
    }
}

/// Use case: one complete poll cycle for one zone.
///
/// Collect serials from primaries and secondaries, evaluate lag, publish.
/// When no primary answered the cycle is reported as an error and nothing
/// is published.
pub struct PollDomainUseCase {
    collect: Arc<CollectSerialsUseCase>,
    publisher: Arc<MetricsPublisher>,
    reporter: Arc<ErrorReporter>,
}

impl PollDomainUseCase {
    pub fn new(
        collect: Arc<CollectSerialsUseCase>,
        publisher: Arc<MetricsPublisher>,
        reporter: Arc<ErrorReporter>,
    ) -> Self {
        Self {
            collect,
            publisher,
            reporter,
        }
    }

    pub async fn execute(
        &self,
        target: &MonitorTarget,
        state: &mut PollState,
    ) -> Result<LagReport, DomainError> {
        info!(domain = %target.zone, "Polling domain");

        let servers = target.targets();
        let collection = self.collect.execute(&target.zone, &servers).await;

        let floor = if state.remember_max_serial {
            state.watermark.as_ref()
        } else {
            None
        };

        let report = match LagEvaluator::evaluate_with_floor(
            &target.zone,
            &collection.poll,
            &target.primaries,
            &target.secondaries,
            floor,
        ) {
            Ok(report) => report,
            Err(e) => {
                self.reporter.report(&e, &ErrorContext::zone(&target.zone));
                return Err(e);
            }
        };

        if state.remember_max_serial {
            SerialWatermark::advance(&mut state.watermark, &report);
        }

        self.publisher.publish_lag(&target.zone, &report);
        Ok(report)
    }
}
