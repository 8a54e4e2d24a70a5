pub mod error_rate;
pub mod error_reporter;
pub mod lag_evaluator;
pub mod metrics_publisher;
pub mod serial_watermark;

pub use error_rate::{ErrorRateCounter, DEFAULT_ERROR_WINDOW};
pub use error_reporter::ErrorReporter;
pub use lag_evaluator::LagEvaluator;
pub use metrics_publisher::MetricsPublisher;
pub use serial_watermark::SerialWatermark;
