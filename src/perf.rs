//! Intent latency instrumentation
//!
//! Measures how long the picker takes to apply each intent (refilter, shift,
//! commit) so slow scans over large inputs show up in the log.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{debug, info};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Maximum number of samples to keep for rolling averages
const MAX_SAMPLES: usize = 100;

/// Threshold for a "slow" intent (microseconds)
const SLOW_INTENT_THRESHOLD_US: u128 = 16_666; // ~16ms (60fps frame budget)

// =============================================================================
// INTENT TIMING
// =============================================================================

/// Tracks processing time of picker intents
#[derive(Debug)]
pub struct IntentTimer {
    /// Processing durations for recent intents
    durations: VecDeque<Duration>,
    /// Count of intents that exceeded the threshold
    slow_count: usize,
    /// Total intents processed
    total: usize,
    max: Duration,
}

impl IntentTimer {
    pub fn new() -> Self {
        Self {
            durations: VecDeque::with_capacity(MAX_SAMPLES),
            slow_count: 0,
            total: 0,
            max: Duration::ZERO,
        }
    }

    /// Record the start of an intent, returns the start instant for timing
    pub fn start(&self) -> Instant {
        Instant::now()
    }

    /// Record the end of an intent started at `start`
    pub fn end(&mut self, label: &'static str, start: Instant) -> Duration {
        let duration = start.elapsed();
        self.record(label, duration);
        duration
    }

    fn record(&mut self, label: &'static str, duration: Duration) {
        if self.durations.len() >= MAX_SAMPLES {
            self.durations.pop_front();
        }
        self.durations.push_back(duration);
        self.total += 1;
        self.max = self.max.max(duration);

        if duration.as_micros() > SLOW_INTENT_THRESHOLD_US {
            self.slow_count += 1;
            debug!(
                category = "INTENT_PERF",
                intent = label,
                duration_ms = duration.as_secs_f64() * 1000.0,
                threshold_ms = SLOW_INTENT_THRESHOLD_US as f64 / 1000.0,
                "Slow intent"
            );
        }
    }

    /// Get average processing time in microseconds over the rolling window
    pub fn avg_time_us(&self) -> u128 {
        if self.durations.is_empty() {
            return 0;
        }

        let total: Duration = self.durations.iter().sum();
        total.as_micros() / self.durations.len() as u128
    }

    pub fn max_time_us(&self) -> u128 {
        self.max.as_micros()
    }

    /// Total intents recorded
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get the percentage of intents that were slow
    pub fn slow_percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.slow_count as f64 / self.total as f64) * 100.0
    }

    /// Log a session summary
    pub fn log_summary(&self) {
        info!(
            category = "INTENT_PERF",
            total = self.total,
            avg_ms = self.avg_time_us() as f64 / 1000.0,
            max_ms = self.max_time_us() as f64 / 1000.0,
            slow_percent = self.slow_percentage(),
            "Intent timing summary"
        );
    }
}

impl Default for IntentTimer {
    fn default() -> Self {
        Self::new()
    }
}
