use soa_monitor_application::ports::{ErrorContext, ErrorSink};
use soa_monitor_domain::DomainError;
use tracing::error;

/// Error tracking backed by the structured log. Always installed, so every
/// error event produces exactly one log line.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

impl TracingErrorSink {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorSink for TracingErrorSink {
    fn capture(&self, err: &DomainError, context: &ErrorContext) {
        let domain = context.zone.as_ref().map(|z| z.name()).unwrap_or("-");
        let server = context.server.as_ref().map(|s| s.as_str()).unwrap_or("-");
        let job = context.job.as_deref().unwrap_or("-");
        error!(
            domain = domain,
            server = server,
            job = job,
            error_class = err.class().as_str(),
            error = %err,
            "Captured error"
        );
    }
}
