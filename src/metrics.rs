//! Dictionary lookup metrics and observability.
//!
//! Tracks how often error construction hits a registered definition, how
//! often callers ask for unknown keys, and how often a render falls back
//! from a requested locale to the default locale.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global dictionary lookup metrics singleton.
pub struct LookupMetrics {
    /// Number of error constructions that found a registered definition
    definition_hits: AtomicUsize,

    /// Number of error constructions for keys absent from the dictionary
    unknown_keys: AtomicUsize,

    /// Number of renders that fell back from the requested locale to the
    /// default locale
    locale_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    fn new() -> Self {
        LookupMetrics {
            definition_hits: AtomicUsize::new(0),
            unknown_keys: AtomicUsize::new(0),
            locale_fallbacks: AtomicUsize::new(0),
        }
    }

    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    /// Record an error construction that found its definition.
    pub fn record_definition_hit(&self) {
        self.definition_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an error construction for an unknown key.
    pub fn record_unknown_key(&self) {
        self.unknown_keys.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a render that fell back to the default locale.
    pub fn record_locale_fallback(&self) {
        self.locale_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current definition hit count.
    pub fn definition_hits(&self) -> usize {
        self.definition_hits.load(Ordering::Relaxed)
    }

    /// Get the current unknown key count.
    pub fn unknown_keys(&self) -> usize {
        self.unknown_keys.load(Ordering::Relaxed)
    }

    /// Get the current locale fallback count.
    pub fn locale_fallbacks(&self) -> usize {
        self.locale_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.definition_hits();
        let unknown = self.unknown_keys();
        let total_lookups = hits + unknown;
        let hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            definition_hits: hits,
            unknown_keys: unknown,
            hit_rate,
            locale_fallbacks: self.locale_fallbacks(),
        }
    }
}

/// Metrics report containing current dictionary lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of error constructions that found a registered definition
    pub definition_hits: usize,

    /// Number of error constructions for unknown keys
    pub unknown_keys: usize,

    /// Definition hit rate as a percentage (0-100)
    pub hit_rate: f64,

    /// Number of renders that fell back to the default locale
    pub locale_fallbacks: usize,
}
