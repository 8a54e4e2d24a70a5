//! Error tracking through Sentry.

use soa_monitor_application::ports::{ErrorContext, ErrorSink};
use soa_monitor_domain::config::SentryConfig;
use soa_monitor_domain::DomainError;
use std::borrow::Cow;
use std::time::Duration;
use tracing::{info, warn};

/// Sends every captured error to the Sentry hub bound to the calling thread,
/// tagged with domain, server, job and error class.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentryErrorSink;

impl SentryErrorSink {
    pub fn new() -> Self {
        Self
    }

    /// Installs the global Sentry client. Events are delivered in the
    /// background until the returned guard is closed.
    pub fn init(config: &SentryConfig) -> Result<(Self, SentryGuard), DomainError> {
        let dsn = config
            .dsn
            .as_deref()
            .map(str::trim)
            .filter(|dsn| !dsn.is_empty())
            .ok_or_else(|| DomainError::ConfigError("Sentry DSN is not set".to_string()))?
            .parse::<sentry::types::Dsn>()
            .map_err(|e| DomainError::ConfigError(format!("Invalid Sentry DSN: {}", e)))?;

        let environment: Option<Cow<'static, str>> = config
            .environment
            .as_deref()
            .map(str::trim)
            .filter(|env| !env.is_empty())
            .map(|env| Cow::Owned(env.to_string()));

        info!(
            environment = environment.as_deref().unwrap_or("-"),
            "Sentry error tracking enabled"
        );

        let guard = sentry::init(sentry::ClientOptions {
            dsn: Some(dsn),
            environment,
            release: sentry::release_name!(),
            ..Default::default()
        });

        Ok((Self, SentryGuard { guard }))
    }
}

impl ErrorSink for SentryErrorSink {
    fn capture(&self, err: &DomainError, context: &ErrorContext) {
        sentry::with_scope(
            |scope| {
                scope.set_tag("error_class", err.class().as_str());
                if let Some(zone) = &context.zone {
                    scope.set_tag("domain", zone.name());
                }
                if let Some(server) = &context.server {
                    scope.set_tag("server", server.as_str());
                }
                if let Some(job) = &context.job {
                    scope.set_tag("job", job);
                }
            },
            || sentry::capture_error(err),
        );
    }
}

/// Keeps the Sentry client alive. Close it at shutdown so queued events are
/// sent before the process exits.
pub struct SentryGuard {
    guard: sentry::ClientInitGuard,
}

impl SentryGuard {
    pub async fn close(self, timeout: Duration) {
        let Self { guard } = self;
        let flushed = tokio::task::spawn_blocking(move || {
            let flushed = guard.flush(Some(timeout));
            drop(guard);
            flushed
        })
        .await
        .unwrap_or(false);

        if !flushed {
            warn!("Not all Sentry events were delivered before shutdown");
        }
    }
}
