//! A simple in-memory metrics recorder for testing.
#![allow(dead_code)]

use metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type CounterKey = (String, Option<String>);

/// Counts increments per metric name and `severity` label.
#[derive(Debug, Clone, Default)]
pub struct TestMetrics {
    counters: Arc<Mutex<HashMap<CounterKey, u64>>>,
}

impl TestMetrics {
    pub fn new() -> Self {
        Default::default()
    }

    /// The value of `name` for one severity label.
    pub fn get_counter(&self, name: &str, severity: &str) -> u64 {
        self.counters
            .lock()
            .unwrap()
            .get(&(name.to_string(), Some(severity.to_string())))
            .cloned()
            .unwrap_or(0)
    }

    /// The value of `name` summed over all labels.
    pub fn total(&self, name: &str) -> u64 {
        self.counters
            .lock()
            .unwrap()
            .iter()
            .filter(|((metric, _), _)| metric == name)
            .map(|(_, value)| *value)
            .sum()
    }
}

impl Recorder for TestMetrics {
    fn describe_counter(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}
    fn describe_gauge(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}
    fn describe_histogram(&self, _key: KeyName, _unit: Option<Unit>, _description: SharedString) {}

    fn register_counter(&self, key: &Key, _metadata: &Metadata<'_>) -> Counter {
        let severity = key
            .labels()
            .find(|label| label.key() == "severity")
            .map(|label| label.value().to_string());
        Counter::from_arc(Arc::new(MetricCounter {
            key: (key.name().to_string(), severity),
            counters: self.counters.clone(),
        }))
    }

    fn register_gauge(&self, _key: &Key, _metadata: &Metadata<'_>) -> Gauge {
        // Not implemented for this test helper
        Gauge::noop()
    }

    fn register_histogram(&self, _key: &Key, _metadata: &Metadata<'_>) -> Histogram {
        // Not implemented for this test helper
        Histogram::noop()
    }
}

#[derive(Debug)]
struct MetricCounter {
    key: CounterKey,
    counters: Arc<Mutex<HashMap<CounterKey, u64>>>,
}

impl metrics::CounterFn for MetricCounter {
    fn increment(&self, value: u64) {
        let mut counters = self.counters.lock().unwrap();
        *counters.entry(self.key.clone()).or_insert(0) += value;
    }

    fn absolute(&self, _value: u64) {
        // Not implemented
    }
}
