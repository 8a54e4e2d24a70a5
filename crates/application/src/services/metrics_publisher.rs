use crate::ports::MetricsSink;
use soa_monitor_domain::{metric_name, LagReport, Zone};
use std::sync::Arc;
use tracing::debug;

/// Pushes lag reports and error rates to the metrics sink, and mirrors every
/// value to the debug log whether or not a sink is configured.
pub struct MetricsPublisher {
    namespace: Arc<str>,
    sink: Option<Arc<dyn MetricsSink>>,
}

impl MetricsPublisher {
    pub fn new(namespace: &str, sink: Option<Arc<dyn MetricsSink>>) -> Self {
        Self {
            namespace: namespace.into(),
            sink,
        }
    }

    pub fn publish_lag(&self, zone: &Zone, report: &LagReport) {
        for sample in &report.samples {
            debug!(
                domain = %zone,
                primary_server = %report.reference_primary,
                primary_serial = report.max_serial.value(),
                secondary_server = %sample.server,
                secondary_serial = sample.serial.value(),
                lag_seconds = sample.lag,
                "Lag sample"
            );

            if let Some(sink) = &self.sink {
                let name = metric_name::lag_seconds(
                    &self.namespace,
                    zone,
                    &report.reference_primary,
                    &sample.server,
                );
                sink.gauge(&name, sample.lag);
            }
        }

        debug!(domain = %zone, max_lag_seconds = report.max_lag, "Max lag");

        if let Some(sink) = &self.sink {
            sink.gauge(&metric_name::max_lag_seconds(&self.namespace, zone), report.max_lag);
        }
    }

    pub fn publish_error_rate(&self, rate: u64, total: u64) {
        debug!(error_rate = rate, errors = total, "Error rate");

        if let Some(sink) = &self.sink {
            sink.counter(&metric_name::error_rate(&self.namespace), to_i64(rate));
            sink.counter(&metric_name::errors_total(&self.namespace), to_i64(total));
        }
    }
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
