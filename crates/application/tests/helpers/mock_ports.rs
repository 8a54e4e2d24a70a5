#![allow(dead_code)]

use async_trait::async_trait;
use soa_monitor_application::ports::{ErrorContext, ErrorSink, MetricsSink, SoaQuery};
use soa_monitor_domain::{DomainError, MonitorTarget, Serial, ServerAddr, Zone};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone)]
enum Answer {
    Serial(u32),
    Error(DomainError),
    Panic,
}

/// Answers SOA queries from a per-server table. Servers without an entry
/// time out.
#[derive(Clone, Default)]
pub struct MockSoaQuery {
    answers: Arc<RwLock<HashMap<String, Answer>>>,
    delays: Arc<RwLock<HashMap<String, Duration>>>,
    calls: Arc<AtomicU64>,
    calls_by_server: Arc<Mutex<HashMap<String, u64>>>,
}

impl MockSoaQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_serial(&self, server: &str, serial: u32) {
        self.answers
            .write()
            .await
            .insert(server.to_string(), Answer::Serial(serial));
    }

    pub async fn set_error(&self, server: &str, error: DomainError) {
        self.answers
            .write()
            .await
            .insert(server.to_string(), Answer::Error(error));
    }

    pub async fn set_panic(&self, server: &str) {
        self.answers
            .write()
            .await
            .insert(server.to_string(), Answer::Panic);
    }

    pub async fn set_delay(&self, server: &str, delay: Duration) {
        self.delays.write().await.insert(server.to_string(), delay);
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    pub fn calls_for(&self, server: &str) -> u64 {
        self.calls_by_server
            .lock()
            .unwrap()
            .get(server)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl SoaQuery for MockSoaQuery {
    async fn query_serial(&self, _zone: &Zone, server: &ServerAddr) -> Result<Serial, DomainError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        *self
            .calls_by_server
            .lock()
            .unwrap()
            .entry(server.to_string())
            .or_insert(0) += 1;

        let delay = self.delays.read().await.get(server.as_str()).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let answer = self.answers.read().await.get(server.as_str()).cloned();
        match answer {
            Some(Answer::Serial(serial)) => Ok(Serial::new(serial)),
            Some(Answer::Error(error)) => Err(error),
            Some(Answer::Panic) => panic!("mock SOA query panicked for {}", server),
            None => Err(DomainError::TransportTimeout {
                server: server.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricKind {
    Gauge,
    Counter,
}

#[derive(Default)]
pub struct RecordingMetricsSink {
    recorded: Mutex<Vec<(MetricKind, String, i64)>>,
    flushes: AtomicU64,
}

impl RecordingMetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gauges(&self) -> Vec<(String, i64)> {
        self.of_kind(MetricKind::Gauge)
    }

    pub fn counters(&self) -> Vec<(String, i64)> {
        self.of_kind(MetricKind::Counter)
    }

    pub fn gauge(&self, name: &str) -> Option<i64> {
        self.gauges()
            .into_iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn counter(&self, name: &str) -> Option<i64> {
        self.counters()
            .into_iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.recorded.lock().unwrap().len()
    }

    pub fn flush_count(&self) -> u64 {
        self.flushes.load(Ordering::Relaxed)
    }

    fn of_kind(&self, kind: MetricKind) -> Vec<(String, i64)> {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _, _)| *k == kind)
            .map(|(_, name, value)| (name.clone(), *value))
            .collect()
    }
}

#[async_trait]
impl MetricsSink for RecordingMetricsSink {
    fn gauge(&self, name: &str, value: i64) {
        self.recorded
            .lock()
            .unwrap()
            .push((MetricKind::Gauge, name.to_string(), value));
    }

    fn counter(&self, name: &str, value: i64) {
        self.recorded
            .lock()
            .unwrap()
            .push((MetricKind::Counter, name.to_string(), value));
    }

    async fn flush(&self) {
        self.flushes.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Default)]
pub struct RecordingErrorSink {
    captured: Mutex<Vec<(DomainError, ErrorContext)>>,
}

impl RecordingErrorSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn captured(&self) -> Vec<(DomainError, ErrorContext)> {
        self.captured.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.captured.lock().unwrap().len()
    }
}

impl ErrorSink for RecordingErrorSink {
    fn capture(&self, error: &DomainError, context: &ErrorContext) {
        self.captured
            .lock()
            .unwrap()
            .push((error.clone(), context.clone()));
    }
}

pub fn server(s: &str) -> ServerAddr {
    ServerAddr::parse(s).unwrap()
}

pub fn servers(list: &[&str]) -> Vec<ServerAddr> {
    list.iter().map(|s| server(s)).collect()
}

pub fn zone(name: &str) -> Zone {
    Zone::new(name).unwrap()
}

pub fn target(domain: &str, primaries: &[&str], secondaries: &[&str]) -> MonitorTarget {
    MonitorTarget::new(
        zone(domain),
        servers(primaries).into(),
        servers(secondaries).into(),
    )
}
