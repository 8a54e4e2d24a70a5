use crate::ports::{ErrorContext, ErrorSink};
use crate::services::ErrorRateCounter;
use soa_monitor_domain::DomainError;
use std::sync::Arc;

/// Single entry point for every error event: counts it and hands it to each
/// error sink in turn. Logging is a sink's job.
pub struct ErrorReporter {
    counter: Arc<ErrorRateCounter>,
    sinks: Vec<Arc<dyn ErrorSink>>,
}

impl ErrorReporter {
    pub fn new(counter: Arc<ErrorRateCounter>) -> Self {
        Self {
            counter,
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn ErrorSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn counter(&self) -> &Arc<ErrorRateCounter> {
        &self.counter
    }

    pub fn report(&self, error: &DomainError, context: &ErrorContext) {
        self.counter.incr();

        for sink in &self.sinks {
            sink.capture(error, context);
        }
    }
}
