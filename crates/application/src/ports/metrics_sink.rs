use async_trait::async_trait;

/// Destination for named measurements.
///
/// `gauge` and `counter` must return immediately; delivery is best-effort
/// and a sink that cannot keep up drops measurements instead of blocking the
/// caller.
#[async_trait]
pub trait MetricsSink: Send + Sync {
    fn gauge(&self, name: &str, value: i64);

    fn counter(&self, name: &str, value: i64);

    /// Deliver anything still buffered. Called once at shutdown.
    async fn flush(&self);
}
