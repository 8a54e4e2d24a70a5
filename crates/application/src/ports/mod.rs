mod error_sink;
mod metrics_sink;
mod soa_query;

pub use error_sink::{ErrorContext, ErrorSink};
pub use metrics_sink::MetricsSink;
pub use soa_query::SoaQuery;
