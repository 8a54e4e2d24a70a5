pub mod error_tracking;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod monitor;
pub mod root;

pub use error_tracking::{ErrorTrackingConfig, SentryConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use metrics::{LibratoConfig, MetricsConfig};
pub use monitor::MonitorConfig;
pub use root::{CliOverrides, Config};
