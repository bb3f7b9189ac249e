//! Translation metrics and observability module.
//!
//! Counts how lookups were resolved and how often the language selection
//! changed or failed to persist. Each `TranslationService` owns its own
//! counters.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// How a single lookup was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Found in the current language.
    Direct,
    /// Found in the fallback language.
    Fallback,
    /// Not found anywhere; the key name was returned.
    Identity,
}

/// Resolution and selection counters.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Lookups answered by the current language
    direct: AtomicUsize,

    /// Lookups answered by the fallback language
    fallback: AtomicUsize,

    /// Lookups answered with the key name itself
    identity: AtomicUsize,

    /// Number of times the current language actually changed
    language_changes: AtomicUsize,

    /// Number of failed writes of the language selection
    persist_failures: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how a lookup was resolved.
    pub fn record_resolution(&self, resolution: Resolution) {
        let counter = match resolution {
            Resolution::Direct => &self.direct,
            Resolution::Fallback => &self.fallback,
            Resolution::Identity => &self.identity,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_change(&self) {
        self.language_changes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_persist_failure(&self) {
        self.persist_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn direct(&self) -> usize {
        self.direct.load(Ordering::Relaxed)
    }

    pub fn fallback(&self) -> usize {
        self.fallback.load(Ordering::Relaxed)
    }

    pub fn identity(&self) -> usize {
        self.identity.load(Ordering::Relaxed)
    }

    pub fn language_changes(&self) -> usize {
        self.language_changes.load(Ordering::Relaxed)
    }

    pub fn persist_failures(&self) -> usize {
        self.persist_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let direct = self.direct();
        let fallback = self.fallback();
        let identity = self.identity();
        let lookups = direct + fallback + identity;
        let fallback_rate = if lookups > 0 {
            ((fallback + identity) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            direct,
            fallback,
            identity,
            fallback_rate,
            language_changes: self.language_changes(),
            persist_failures: self.persist_failures(),
        }
    }
}

/// Metrics report containing current translation statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Total lookups through `translate`
    pub lookups: usize,

    pub direct: usize,

    pub fallback: usize,

    pub identity: usize,

    /// Share of lookups not answered by the current language, as a percentage (0-100)
    pub fallback_rate: f64,

    pub language_changes: usize,

    pub persist_failures: usize,
}
