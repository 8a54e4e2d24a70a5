use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorConfig {
    /// Zones to monitor.
    #[serde(default)]
    pub domains: Vec<String>,

    #[serde(default)]
    pub primary_servers: Vec<String>,

    #[serde(default)]
    pub secondary_servers: Vec<String>,

    /// Seconds between poll cycles, also the error-rate reporting cadence.
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Keep the highest primary serial seen across cycles as a floor for the
    /// next evaluation.
    #[serde(default)]
    pub remember_max_serial: bool,

    #[serde(default)]
    pub debug: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            primary_servers: Vec::new(),
            secondary_servers: Vec::new(),
            poll_interval: default_poll_interval(),
            query_timeout_ms: default_query_timeout_ms(),
            remember_max_serial: false,
            debug: false,
        }
    }
}

fn default_poll_interval() -> u64 {
    60
}

fn default_query_timeout_ms() -> u64 {
    2000
}
