pub mod sentry_sink;
pub mod tracing_sink;

pub use sentry_sink::{SentryErrorSink, SentryGuard};
pub use tracing_sink::TracingErrorSink;
