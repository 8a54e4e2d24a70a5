//! Metric names pushed to the metrics sink.
//!
//! Components derived from zone or server strings have `.` replaced by `_`
//! so a hostname never introduces extra namespace levels.

use crate::server_addr::ServerAddr;
use crate::zone::Zone;

pub fn sanitize(component: &str) -> String {
    component.replace('.', "_")
}

/// `<ns>.<zone>.primary.<primary>.secondary.<target>.lag_seconds`
pub fn lag_seconds(namespace: &str, zone: &Zone, primary: &ServerAddr, target: &ServerAddr) -> String {
    format!(
        "{}.{}.primary.{}.secondary.{}.lag_seconds",
        namespace,
        sanitize(zone.name()),
        sanitize(primary.as_str()),
        sanitize(target.as_str())
    )
}

/// `<ns>.<zone>.max_lag_seconds`
pub fn max_lag_seconds(namespace: &str, zone: &Zone) -> String {
    format!("{}.{}.max_lag_seconds", namespace, sanitize(zone.name()))
}

pub fn error_rate(namespace: &str) -> String {
    format!("{}.error_rate", namespace)
}

pub fn errors_total(namespace: &str) -> String {
    format!("{}.errors", namespace)
}
