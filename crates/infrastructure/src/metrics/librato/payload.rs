use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MeasurementKind {
    Gauge,
    Counter,
}

#[derive(Debug, Clone)]
pub(super) struct Measurement {
    pub kind: MeasurementKind,
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(super) struct LibratoMeasurement {
    pub name: String,
    pub value: i64,
}

/// Body of one `POST /v1/metrics` submission.
#[derive(Debug, Serialize)]
pub(super) struct LibratoPayload<'a> {
    pub source: &'a str,
    pub measure_time: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gauges: Vec<LibratoMeasurement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub counters: Vec<LibratoMeasurement>,
}

impl<'a> LibratoPayload<'a> {
    pub fn from_batch(source: &'a str, measure_time: i64, batch: Vec<Measurement>) -> Self {
        let mut gauges = Vec::new();
        let mut counters = Vec::new();

        for m in batch {
            let entry = LibratoMeasurement {
                name: m.name,
                value: m.value,
            };
            match m.kind {
                MeasurementKind::Gauge => gauges.push(entry),
                MeasurementKind::Counter => counters.push(entry),
            }
        }

        Self {
            source,
            measure_time,
            gauges,
            counters,
        }
    }

    pub fn len(&self) -> usize {
        self.gauges.len() + self.counters.len()
    }
}
