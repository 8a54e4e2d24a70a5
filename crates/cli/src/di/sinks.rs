use soa_monitor_application::ports::{ErrorSink, MetricsSink, SoaQuery};
use soa_monitor_domain::Config;
use soa_monitor_infrastructure::dns::HickorySoaClient;
use soa_monitor_infrastructure::errors::{SentryErrorSink, SentryGuard, TracingErrorSink};
use soa_monitor_infrastructure::metrics::LibratoSink;
use soa_monitor_infrastructure::system::resolve_metrics_source;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Outbound adapters: the DNS client plus the metrics and error sinks.
pub struct Sinks {
    pub soa: Arc<dyn SoaQuery>,
    pub metrics: Option<Arc<dyn MetricsSink>>,
    pub errors: Vec<Arc<dyn ErrorSink>>,
    pub sentry: Option<SentryGuard>,
}

impl Sinks {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let soa: Arc<dyn SoaQuery> = Arc::new(HickorySoaClient::new(Duration::from_millis(
            config.monitor.query_timeout_ms,
        )));

        let librato = &config.metrics.librato;
        let metrics: Option<Arc<dyn MetricsSink>> = if librato.is_enabled() {
            let source = resolve_metrics_source(librato.source.as_deref())?;
            Some(Arc::new(LibratoSink::new(librato, source)?))
        } else {
            info!("No metrics credentials configured, lag values go to the log only");
            None
        };

        let mut errors: Vec<Arc<dyn ErrorSink>> = vec![Arc::new(TracingErrorSink::new())];
        let sentry = if config.errors.sentry.is_enabled() {
            let (sink, guard) = SentryErrorSink::init(&config.errors.sentry)?;
            errors.push(Arc::new(sink));
            Some(guard)
        } else {
            None
        };

        Ok(Self {
            soa,
            metrics,
            errors,
            sentry,
        })
    }
}
