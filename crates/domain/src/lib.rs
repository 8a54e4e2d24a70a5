//! SOA Monitor Domain Layer
pub mod config;
pub mod errors;
pub mod lag;
pub mod metric_name;
pub mod monitor_target;
pub mod poll_result;
pub mod serial;
pub mod server_addr;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{DomainError, ErrorClass};
pub use lag::{LagReport, LagSample};
pub use monitor_target::MonitorTarget;
pub use poll_result::PollResult;
pub use serial::Serial;
pub use server_addr::{ServerAddr, ServerEndpoint, DEFAULT_DNS_PORT};
pub use zone::Zone;
