use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ErrorTrackingConfig {
    #[serde(default)]
    pub sentry: SentryConfig,
}

/// Sentry error tracking. Disabled unless a DSN is set.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SentryConfig {
    #[serde(default)]
    pub dsn: Option<String>,

    /// Environment tag attached to every event (`production`, `staging`, ...).
    #[serde(default)]
    pub environment: Option<String>,
}

impl SentryConfig {
    pub fn is_enabled(&self) -> bool {
        self.dsn.as_deref().is_some_and(|dsn| !dsn.trim().is_empty())
    }
}
