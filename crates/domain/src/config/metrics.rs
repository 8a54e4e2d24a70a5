use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    /// Prefix of every metric name.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default)]
    pub librato: LibratoConfig,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            librato: LibratoConfig::default(),
        }
    }
}

/// Librato-compatible HTTP metrics API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibratoConfig {
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub token: Option<String>,

    /// Source identifier attached to every measurement. Falls back to the
    /// `DYNO` environment value, then to the local hostname.
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_flush_interval_ms")]
    pub flush_interval_ms: u64,
}

impl LibratoConfig {
    pub fn is_enabled(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
        present(&self.user) && present(&self.token)
    }
}

impl Default for LibratoConfig {
    fn default() -> Self {
        Self {
            user: None,
            token: None,
            source: None,
            endpoint: default_endpoint(),
            flush_interval_ms: default_flush_interval_ms(),
        }
    }
}

fn default_namespace() -> String {
    "dns-soa-monitor".to_string()
}

fn default_endpoint() -> String {
    "https://metrics-api.librato.com/v1/metrics".to_string()
}

fn default_flush_interval_ms() -> u64 {
    5000
}
