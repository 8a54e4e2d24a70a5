pub mod metrics_source;

pub use metrics_source::{local_hostname, resolve_metrics_source};
