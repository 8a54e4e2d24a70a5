use soa_monitor_domain::DomainError;

pub fn local_hostname() -> Result<String, DomainError> {
    hostname::get()
        .map_err(|e| DomainError::ConfigError(format!("Failed to read local hostname: {}", e)))?
        .into_string()
        .map_err(|_| DomainError::ConfigError("Local hostname is not valid UTF-8".to_string()))
}

/// Source name attached to every metrics submission.
///
/// Explicit configuration wins, then the `DYNO` environment value, then the
/// local hostname.
pub fn resolve_metrics_source(configured: Option<&str>) -> Result<String, DomainError> {
    pick_source(configured, std::env::var("DYNO").ok().as_deref(), local_hostname)
}

fn pick_source(
    configured: Option<&str>,
    dyno: Option<&str>,
    hostname: impl FnOnce() -> Result<String, DomainError>,
) -> Result<String, DomainError> {
    let non_empty = |s: &&str| !s.trim().is_empty();

    if let Some(source) = configured.filter(non_empty) {
        return Ok(source.trim().to_string());
    }
    if let Some(dyno) = dyno.filter(non_empty) {
        return Ok(dyno.trim().to_string());
    }
    hostname()
}
