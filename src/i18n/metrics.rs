//! Resolution metrics and observability.
//!
//! Counts how content lookups were satisfied and how language switches
//! went. Each switcher owns its own counters.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct ResolutionMetrics {
    /// Lookups satisfied by the active language's dictionary
    direct_hits: AtomicUsize,

    /// Lookups satisfied by the default language's dictionary
    fallback_hits: AtomicUsize,

    /// Lookups missing from every dictionary
    misses: AtomicUsize,

    /// Switches that changed the active language
    switches: AtomicUsize,

    /// Switch requests with an unsupported code
    ignored_switches: AtomicUsize,
}

impl ResolutionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_direct_hit(&self) {
        self.direct_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback_hit(&self) {
        self.fallback_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_switch(&self) {
        self.switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ignored_switch(&self) {
        self.ignored_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct_hits(&self) -> usize {
        self.direct_hits.load(Ordering::Relaxed)
    }

    pub fn fallback_hits(&self) -> usize {
        self.fallback_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn switches(&self) -> usize {
        self.switches.load(Ordering::Relaxed)
    }

    pub fn ignored_switches(&self) -> usize {
        self.ignored_switches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let direct = self.direct_hits();
        let fallback = self.fallback_hits();
        let misses = self.misses();
        let total_lookups = direct + fallback + misses;
        let fallback_rate = if total_lookups > 0 {
            (fallback as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            direct_hits: direct,
            fallback_hits: fallback,
            misses,
            fallback_rate,
            switches: self.switches(),
            ignored_switches: self.ignored_switches(),
        }
    }
}

/// Metrics report containing current resolution statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub direct_hits: usize,
    pub fallback_hits: usize,
    pub misses: usize,

    /// Share of lookups served by the default language, as a percentage (0-100)
    pub fallback_rate: f64,

    pub switches: usize,
    pub ignored_switches: usize,
}
