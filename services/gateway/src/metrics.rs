//! Request metrics for the rates gateway
//!
//! Counts outcomes of rate replacement and rate lookup requests and keeps a
//! rolling window of lookup latencies. Exposed as a flat JSON object on
//! `/metrics`.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Core metrics for the rates gateway.
pub struct ServiceMetrics {
    // PUT /rates
    pub put_rates_success: AtomicU64,
    pub put_rates_error: AtomicU64,

    // GET /rate
    pub get_rate_success: AtomicU64,
    pub get_rate_not_found: AtomicU64,
    pub get_rate_bad_request: AtomicU64,
    pub get_rate_latency_ns: Mutex<LatencyTracker>,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self {
            put_rates_success: AtomicU64::new(0),
            put_rates_error: AtomicU64::new(0),
            get_rate_success: AtomicU64::new(0),
            get_rate_not_found: AtomicU64::new(0),
            get_rate_bad_request: AtomicU64::new(0),
            get_rate_latency_ns: Mutex::new(LatencyTracker::new(1000)),
        }
    }

    /// Record a successful rate replacement.
    pub fn record_put_success(&self) {
        self.put_rates_success.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected rate replacement.
    pub fn record_put_error(&self) {
        self.put_rates_error.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a priced lookup and how long it took.
    pub fn record_get_success(&self, latency_ns: u64) {
        self.get_rate_success.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut tracker) = self.get_rate_latency_ns.lock() {
            tracker.record(latency_ns);
        }
    }

    /// Record a lookup that found no rate.
    pub fn record_get_not_found(&self) {
        self.get_rate_not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup with unusable parameters.
    pub fn record_get_bad_request(&self) {
        self.get_rate_bad_request.fetch_add(1, Ordering::Relaxed);
    }

    /// Export metrics as a BTreeMap for JSON exposition.
    pub fn export(&self) -> BTreeMap<String, u64> {
        let mut m = BTreeMap::new();
        m.insert("put_rates_success".to_string(), self.put_rates_success.load(Ordering::Relaxed));
        m.insert("put_rates_error".to_string(), self.put_rates_error.load(Ordering::Relaxed));
        m.insert("get_rate_success".to_string(), self.get_rate_success.load(Ordering::Relaxed));
        m.insert("get_rate_not_found".to_string(), self.get_rate_not_found.load(Ordering::Relaxed));
        m.insert("get_rate_bad_request".to_string(), self.get_rate_bad_request.load(Ordering::Relaxed));

        if let Ok(tracker) = self.get_rate_latency_ns.lock() {
            if let Some(p50) = tracker.percentile(50) {
                m.insert("get_rate_latency_p50_ns".to_string(), p50);
            }
            if let Some(p99) = tracker.percentile(99) {
                m.insert("get_rate_latency_p99_ns".to_string(), p99);
            }
        }
        m
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks latency samples for percentile calculation.
pub struct LatencyTracker {
    samples: Vec<u64>,
    max_samples: usize,
}

impl LatencyTracker {
    pub fn new(max_samples: usize) -> Self {
        Self {
            samples: Vec::with_capacity(max_samples),
            max_samples,
        }
    }

    /// Record a latency sample.
    pub fn record(&mut self, value: u64) {
        if self.samples.len() >= self.max_samples {
            self.samples.remove(0);
        }
        self.samples.push(value);
    }

    /// Get a percentile value (0-100).
    pub fn percentile(&self, p: usize) -> Option<u64> {
        if self.samples.is_empty() {
            return None;
        }

        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        let idx = (p as f64 / 100.0 * (sorted.len() - 1) as f64) as usize;
        Some(sorted[idx.min(sorted.len() - 1)])
    }
}
