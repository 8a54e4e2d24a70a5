use serde::{Deserialize, Serialize};

const WORKSPACE_TARGETS: [&str; 5] = [
    "soa_monitor",
    "soa_monitor_domain",
    "soa_monitor_application",
    "soa_monitor_infrastructure",
    "soa_monitor_jobs",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit log lines as JSON objects instead of human-readable text.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Filter directive to use when `RUST_LOG` is not set.
    ///
    /// Debug mode raises only this workspace's crates to `debug`, and only
    /// when the configured level is quieter. Dependencies keep the
    /// configured level.
    pub fn effective_level(&self, debug: bool) -> String {
        if !debug || !matches!(self.level.as_str(), "info" | "warn" | "error") {
            return self.level.clone();
        }

        let mut directive = self.level.clone();
        for target in WORKSPACE_TARGETS {
            directive.push_str(&format!(",{}=debug", target));
        }
        directive
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
