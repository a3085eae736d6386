//! Request metrics for production monitoring
//!
//! Tracks how the prediction endpoint behaves in aggregate: request
//! volume, validation rejections, internal failures, and prediction
//! latency. Counters are lock-free atomics shared across handler
//! clones, and the whole set exports in Prometheus text format via
//! `GET /metrics`.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Central metrics collector shared by all request handlers
#[derive(Debug, Clone)]
pub struct MetricsCollector {
    /// Total number of prediction requests received
    total_requests: Arc<AtomicUsize>,
    /// Requests that returned a prediction
    successful_requests: Arc<AtomicUsize>,
    /// Requests rejected at validation (HTTP 422)
    rejected_requests: Arc<AtomicUsize>,
    /// Requests that failed internally (HTTP 500)
    failed_requests: Arc<AtomicUsize>,
    /// Total time spent loading and running the model, microseconds
    total_predict_time_us: Arc<AtomicU64>,
    /// Start time for rate calculations
    start_time: Instant,
}

impl MetricsCollector {
    /// Create a new metrics collector
    #[must_use]
    pub fn new() -> Self {
        Self {
            total_requests: Arc::new(AtomicUsize::new(0)),
            successful_requests: Arc::new(AtomicUsize::new(0)),
            rejected_requests: Arc::new(AtomicUsize::new(0)),
            failed_requests: Arc::new(AtomicUsize::new(0)),
            total_predict_time_us: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    /// Record a request that produced a prediction
    #[allow(clippy::cast_possible_truncation)]
    pub fn record_success(&self, duration: Duration) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.successful_requests.fetch_add(1, Ordering::Relaxed);
        self.total_predict_time_us
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    /// Record a request rejected at validation
    pub fn record_rejection(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.rejected_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request that failed internally
    pub fn record_failure(&self) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.failed_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current snapshot of metrics
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let total_requests = self.total_requests.load(Ordering::Relaxed);
        let successful = self.successful_requests.load(Ordering::Relaxed);
        let rejected = self.rejected_requests.load(Ordering::Relaxed);
        let failed = self.failed_requests.load(Ordering::Relaxed);
        let total_time_us = self.total_predict_time_us.load(Ordering::Relaxed);
        let uptime = self.start_time.elapsed();

        MetricsSnapshot {
            total_requests,
            successful_requests: successful,
            rejected_requests: rejected,
            failed_requests: failed,
            total_predict_time_us: total_time_us,
            uptime_secs: uptime.as_secs(),
            requests_per_sec: if uptime.as_secs() > 0 {
                total_requests as f64 / uptime.as_secs_f64()
            } else {
                0.0
            },
            avg_latency_ms: if successful > 0 {
                (total_time_us as f64 / 1000.0) / successful as f64
            } else {
                0.0
            },
            error_rate: if total_requests > 0 {
                failed as f64 / total_requests as f64
            } else {
                0.0
            },
        }
    }

    /// Export metrics in Prometheus format
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_prometheus(&self) -> String {
        let snapshot = self.snapshot();
        format!(
            "# HELP catador_requests_total Total number of prediction requests\n\
             # TYPE catador_requests_total counter\n\
             catador_requests_total {}\n\
             # HELP catador_requests_successful Requests that returned a prediction\n\
             # TYPE catador_requests_successful counter\n\
             catador_requests_successful {}\n\
             # HELP catador_requests_rejected Requests rejected at validation\n\
             # TYPE catador_requests_rejected counter\n\
             catador_requests_rejected {}\n\
             # HELP catador_requests_failed Requests that failed internally\n\
             # TYPE catador_requests_failed counter\n\
             catador_requests_failed {}\n\
             # HELP catador_predict_time_seconds Total artifact load and inference time\n\
             # TYPE catador_predict_time_seconds counter\n\
             catador_predict_time_seconds {:.6}\n\
             # HELP catador_requests_per_second Request rate\n\
             # TYPE catador_requests_per_second gauge\n\
             catador_requests_per_second {:.2}\n\
             # HELP catador_avg_latency_ms Average prediction latency in milliseconds\n\
             # TYPE catador_avg_latency_ms gauge\n\
             catador_avg_latency_ms {:.2}\n\
             # HELP catador_error_rate Error rate (0.0-1.0)\n\
             # TYPE catador_error_rate gauge\n\
             catador_error_rate {:.4}\n\
             # HELP catador_uptime_seconds Uptime in seconds\n\
             # TYPE catador_uptime_seconds counter\n\
             catador_uptime_seconds {}\n",
            snapshot.total_requests,
            snapshot.successful_requests,
            snapshot.rejected_requests,
            snapshot.failed_requests,
            snapshot.total_predict_time_us as f64 / 1_000_000.0,
            snapshot.requests_per_sec,
            snapshot.avg_latency_ms,
            snapshot.error_rate,
            snapshot.uptime_secs
        )
    }

    /// Reset all metrics (useful for testing)
    pub fn reset(&self) {
        self.total_requests.store(0, Ordering::Relaxed);
        self.successful_requests.store(0, Ordering::Relaxed);
        self.rejected_requests.store(0, Ordering::Relaxed);
        self.failed_requests.store(0, Ordering::Relaxed);
        self.total_predict_time_us.store(0, Ordering::Relaxed);
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    /// Total number of prediction requests received
    pub total_requests: usize,
    /// Requests that returned a prediction
    pub successful_requests: usize,
    /// Requests rejected at validation (HTTP 422)
    pub rejected_requests: usize,
    /// Requests that failed internally (HTTP 500)
    pub failed_requests: usize,
    /// Total artifact load and inference time in microseconds
    pub total_predict_time_us: u64,
    /// System uptime in seconds
    pub uptime_secs: u64,
    /// Request rate (requests per second)
    pub requests_per_sec: f64,
    /// Average prediction latency in milliseconds
    pub avg_latency_ms: f64,
    /// Error rate as a fraction (0.0 to 1.0)
    pub error_rate: f64,
}
