use super::Sinks;
use soa_monitor_application::services::{ErrorRateCounter, ErrorReporter, MetricsPublisher};
use soa_monitor_application::use_cases::{CollectSerialsUseCase, PollDomainUseCase};
use soa_monitor_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub poll_domain: Arc<PollDomainUseCase>,
    pub publisher: Arc<MetricsPublisher>,
    pub error_counter: Arc<ErrorRateCounter>,
    pub reporter: Arc<ErrorReporter>,
}

impl UseCases {
    pub fn new(config: &Config, sinks: &Sinks) -> Self {
        let error_counter = Arc::new(ErrorRateCounter::new());
        let reporter = Arc::new(
            sinks
                .errors
                .iter()
                .cloned()
                .fold(ErrorReporter::new(error_counter.clone()), ErrorReporter::with_sink),
        );
        let publisher = Arc::new(MetricsPublisher::new(
            &config.metrics.namespace,
            sinks.metrics.clone(),
        ));

        let collect = Arc::new(CollectSerialsUseCase::new(
            sinks.soa.clone(),
            reporter.clone(),
        ));
        let poll_domain = Arc::new(PollDomainUseCase::new(
            collect,
            publisher.clone(),
            reporter.clone(),
        ));

        Self {
            poll_domain,
            publisher,
            error_counter,
            reporter,
        }
    }
}
