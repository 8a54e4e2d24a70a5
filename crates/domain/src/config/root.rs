use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error_tracking::ErrorTrackingConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::metrics::MetricsConfig;
use super::monitor::MonitorConfig;
use crate::monitor_target::MonitorTarget;
use crate::server_addr::ServerAddr;
use crate::zone::Zone;

/// Main configuration structure for the SOA monitor
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Zones, servers and polling cadence
    #[serde(default)]
    pub monitor: MonitorConfig,

    /// Metric naming and sink configuration
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// External error tracking
    #[serde(default)]
    pub errors: ErrorTrackingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. soa-monitor.toml in current directory
    /// 3. /etc/soa-monitor/config.toml
    /// 4. Default configuration
    ///
    /// Command-line and environment overrides are applied on top.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(domains) = overrides.domains {
            self.monitor.domains = domains;
        }
        if let Some(primaries) = overrides.primary_servers {
            self.monitor.primary_servers = primaries;
        }
        if let Some(secondaries) = overrides.secondary_servers {
            self.monitor.secondary_servers = secondaries;
        }
        if let Some(interval) = overrides.poll_interval {
            self.monitor.poll_interval = interval;
        }
        if let Some(debug) = overrides.debug {
            self.monitor.debug = debug;
        }
        if let Some(user) = overrides.librato_user {
            self.metrics.librato.user = Some(user);
        }
        if let Some(token) = overrides.librato_token {
            self.metrics.librato.token = Some(token);
        }
        if let Some(source) = overrides.librato_source {
            self.metrics.librato.source = Some(source);
        }
        if let Some(dsn) = overrides.sentry_dsn {
            self.errors.sentry.dsn = Some(dsn);
        }
        if let Some(environment) = overrides.sentry_environment {
            self.errors.sentry.environment = Some(environment);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let monitor = &self.monitor;

        if monitor.domains.is_empty() {
            return Err(ConfigError::Validation(
                "No domains configured (monitor.domains / DOMAIN_NAMES)".to_string(),
            ));
        }
        if monitor.primary_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No primary servers configured (monitor.primary_servers / PRIMARY_SERVERS)"
                    .to_string(),
            ));
        }
        if monitor.secondary_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No secondary servers configured (monitor.secondary_servers / SECONDARY_SERVERS)"
                    .to_string(),
            ));
        }
        if monitor.poll_interval == 0 {
            return Err(ConfigError::Validation(
                "Poll interval must be at least 1 second".to_string(),
            ));
        }
        if monitor.query_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Query timeout cannot be 0".to_string(),
            ));
        }
        if self.metrics.namespace.is_empty() {
            return Err(ConfigError::Validation(
                "Metrics namespace cannot be empty".to_string(),
            ));
        }

        self.monitor_targets().map(|_| ())
    }

    /// One target per configured domain, sharing the parsed server lists.
    pub fn monitor_targets(&self) -> Result<Vec<MonitorTarget>, ConfigError> {
        let primaries = parse_servers(&self.monitor.primary_servers)?;
        let secondaries = parse_servers(&self.monitor.secondary_servers)?;

        self.monitor
            .domains
            .iter()
            .map(|domain| {
                let zone = Zone::new(domain).map_err(|e| ConfigError::Validation(e.to_string()))?;
                Ok(MonitorTarget::new(
                    zone,
                    Arc::clone(&primaries),
                    Arc::clone(&secondaries),
                ))
            })
            .collect()
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("soa-monitor.toml").exists() {
            Some("soa-monitor.toml".to_string())
        } else if std::path::Path::new("/etc/soa-monitor/config.toml").exists() {
            Some("/etc/soa-monitor/config.toml".to_string())
        } else {
            None
        }
    }
}

fn parse_servers(servers: &[String]) -> Result<Arc<[ServerAddr]>, ConfigError> {
    servers
        .iter()
        .map(|s| ServerAddr::parse(s).map_err(|e| ConfigError::Validation(e.to_string())))
        .collect()
}

/// Command-line and environment overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub domains: Option<Vec<String>>,
    pub primary_servers: Option<Vec<String>>,
    pub secondary_servers: Option<Vec<String>>,
    pub poll_interval: Option<u64>,
    pub debug: Option<bool>,
    pub librato_user: Option<String>,
    pub librato_token: Option<String>,
    pub librato_source: Option<String>,
    pub sentry_dsn: Option<String>,
    pub sentry_environment: Option<String>,
    pub log_level: Option<String>,
}
