use soa_monitor_domain::{DomainError, ServerAddr, Zone};

/// Where an error happened.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub zone: Option<Zone>,
    pub server: Option<ServerAddr>,
    /// Background job the error escaped from, if any.
    pub job: Option<String>,
}

impl ErrorContext {
    pub fn zone(zone: &Zone) -> Self {
        Self {
            zone: Some(zone.clone()),
            ..Self::default()
        }
    }

    pub fn server(zone: &Zone, server: &ServerAddr) -> Self {
        Self {
            zone: Some(zone.clone()),
            server: Some(server.clone()),
            job: None,
        }
    }

    pub fn job(name: &str) -> Self {
        Self {
            job: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_job(mut self, name: &str) -> Self {
        self.job = Some(name.to_string());
        self
    }
}

/// Centralized error tracking. Fire-and-forget.
pub trait ErrorSink: Send + Sync {
    fn capture(&self, error: &DomainError, context: &ErrorContext);
}
