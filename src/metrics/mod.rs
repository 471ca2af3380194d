//! Prometheus metrics for monitoring.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Metrics collector.
#[derive(Debug, Default)]
pub struct Metrics {
    /// Total GraphQL requests processed
    pub requests_total: AtomicU64,
    /// Requests answered without errors
    pub requests_success: AtomicU64,
    /// Requests whose response carried errors
    pub requests_failed: AtomicU64,
    /// Persons created through `add`
    pub persons_added: AtomicU64,
    /// Successful phone edits
    pub phones_edited: AtomicU64,
    /// Adds rejected for a duplicate name
    pub duplicate_rejections: AtomicU64,
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Increment requests total.
    pub fn inc_requests(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment successful requests.
    pub fn inc_success(&self) {
        self.requests_success.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment failed requests.
    pub fn inc_failed(&self) {
        self.requests_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_persons_added(&self) {
        self.persons_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_phones_edited(&self) {
        self.phones_edited.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_duplicate_rejections(&self) {
        self.duplicate_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            requests_success: self.requests_success.load(Ordering::Relaxed),
            requests_failed: self.requests_failed.load(Ordering::Relaxed),
            persons_added: self.persons_added.load(Ordering::Relaxed),
            phones_edited: self.phones_edited.load(Ordering::Relaxed),
            duplicate_rejections: self.duplicate_rejections.load(Ordering::Relaxed),
        }
    }

    /// Export metrics in Prometheus format.
    ///
    /// `persons` is the current store size, sampled by the caller.
    pub fn to_prometheus(&self, persons: usize) -> String {
        let s = self.snapshot();
        format!(
            r#"# HELP contacts_requests_total Total number of GraphQL requests
# TYPE contacts_requests_total counter
contacts_requests_total {}

# HELP contacts_requests_success Requests answered without errors
# TYPE contacts_requests_success counter
contacts_requests_success {}

# HELP contacts_requests_failed Requests answered with errors
# TYPE contacts_requests_failed counter
contacts_requests_failed {}

# HELP contacts_persons_added Persons created
# TYPE contacts_persons_added counter
contacts_persons_added {}

# HELP contacts_phones_edited Phone numbers updated
# TYPE contacts_phones_edited counter
contacts_phones_edited {}

# HELP contacts_duplicate_rejections Adds rejected for a duplicate name
# TYPE contacts_duplicate_rejections counter
contacts_duplicate_rejections {}

# HELP contacts_persons Persons currently stored
# TYPE contacts_persons gauge
contacts_persons {}
"#,
            s.requests_total,
            s.requests_success,
            s.requests_failed,
            s.persons_added,
            s.phones_edited,
            s.duplicate_rejections,
            persons
        )
    }
}

/// Metrics snapshot.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub requests_success: u64,
    pub requests_failed: u64,
    pub persons_added: u64,
    pub phones_edited: u64,
    pub duplicate_rejections: u64,
}

/// Timer for measuring durations.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time in milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
