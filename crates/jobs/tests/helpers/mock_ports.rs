#![allow(dead_code)]

use async_trait::async_trait;
use soa_monitor_application::ports::{ErrorContext, ErrorSink, MetricsSink, SoaQuery};
use soa_monitor_application::services::{ErrorRateCounter, ErrorReporter, MetricsPublisher};
use soa_monitor_application::use_cases::{CollectSerialsUseCase, PollDomainUseCase};
use soa_monitor_domain::{DomainError, MonitorTarget, Serial, ServerAddr, Zone};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

/// Per-server serials; servers without an entry time out.
#[derive(Clone, Default)]
pub struct MockSoaQuery {
    serials: Arc<RwLock<HashMap<String, u32>>>,
    calls: Arc<AtomicU64>,
    calls_by_zone: Arc<Mutex<HashMap<String, u64>>>,
}

impl MockSoaQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_serial(&self, server: &str, serial: u32) {
        self.serials.write().await.insert(server.to_string(), serial);
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn calls_for_zone(&self, zone: &str) -> u64 {
        self.calls_by_zone
            .lock()
            .unwrap()
            .get(zone)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl SoaQuery for MockSoaQuery {
    async fn query_serial(&self, zone: &Zone, server: &ServerAddr) -> Result<Serial, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .calls_by_zone
            .lock()
            .unwrap()
            .entry(zone.to_string())
            .or_insert(0) += 1;

        match self.serials.read().await.get(server.as_str()) {
            Some(serial) => Ok(Serial::new(*serial)),
            None => Err(DomainError::TransportTimeout {
                server: server.to_string(),
            }),
        }
    }
}

#[derive(Default)]
pub struct RecordingMetricsSink {
    gauges: Mutex<Vec<(String, i64)>>,
    counters: Mutex<Vec<(String, i64)>>,
}

impl RecordingMetricsSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gauges(&self) -> Vec<(String, i64)> {
        self.gauges.lock().unwrap().clone()
    }

    pub fn counters(&self) -> Vec<(String, i64)> {
        self.counters.lock().unwrap().clone()
    }

    pub fn last_counter(&self, name: &str) -> Option<i64> {
        self.counters()
            .into_iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }
}

#[async_trait]
impl MetricsSink for RecordingMetricsSink {
    fn gauge(&self, name: &str, value: i64) {
        self.gauges.lock().unwrap().push((name.to_string(), value));
    }

    fn counter(&self, name: &str, value: i64) {
        self.counters.lock().unwrap().push((name.to_string(), value));
    }

    async fn flush(&self) {}
}

/// Blows up on the first gauge, taking the calling job down with it.
pub struct PanickingMetricsSink;

#[async_trait]
impl MetricsSink for PanickingMetricsSink {
    fn gauge(&self, _name: &str, _value: i64) {
        panic!("metrics backend exploded");
    }

    fn counter(&self, _name: &str, _value: i64) {}

    async fn flush(&self) {}
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
}

impl ErrorSink for RecordingErrorSink {
    fn capture(&self, error: &DomainError, context: &ErrorContext) {
        self.captured
            .lock()
            .unwrap()
            .push((error.clone(), context.clone()));
    }
}

pub struct Wiring {
    pub poll: Arc<PollDomainUseCase>,
    pub publisher: Arc<MetricsPublisher>,
    pub counter: Arc<ErrorRateCounter>,
    pub metrics: Arc<RecordingMetricsSink>,
}

pub fn wire(soa: Arc<MockSoaQuery>) -> Wiring {
    let metrics = Arc::new(RecordingMetricsSink::new());
    let counter = Arc::new(ErrorRateCounter::new());
    let reporter = Arc::new(ErrorReporter::new(counter.clone()));
    let publisher = Arc::new(MetricsPublisher::new(
        "dns-soa-monitor",
        Some(metrics.clone() as Arc<dyn MetricsSink>),
    ));
    let collect = Arc::new(CollectSerialsUseCase::new(soa, reporter.clone()));
    let poll = Arc::new(PollDomainUseCase::new(collect, publisher.clone(), reporter));

    Wiring {
        poll,
        publisher,
        counter,
        metrics,
    }
}

pub fn target(domain: &str, primaries: &[&str], secondaries: &[&str]) -> MonitorTarget {
    let parse = |list: &[&str]| -> Arc<[ServerAddr]> {
        list.iter().map(|s| ServerAddr::parse(s).unwrap()).collect()
    };
    MonitorTarget::new(Zone::new(domain).unwrap(), parse(primaries), parse(secondaries))
}
