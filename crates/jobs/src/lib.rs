pub mod domain_monitor;
pub mod error_rate_report;
pub mod runner;

pub use domain_monitor::DomainMonitorJob;
pub use error_rate_report::ErrorRateReportJob;
pub use runner::JobRunner;
