//! Performance metrics collection for the simulation.
//!
//! Provides structured logging and metrics tracking for monitoring tick
//! throughput and population health.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Metrics collector owned by the world store.
pub struct Metrics {
    tick_count: AtomicU64,
    population: AtomicU64,
    removed_total: AtomicU64,
    spawned_total: AtomicU64,
    pub counters: Mutex<HashMap<String, AtomicU64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            population: AtomicU64::new(0),
            removed_total: AtomicU64::new(0),
            spawned_total: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration and outcome counts.
    pub fn record_tick(&self, duration: Duration, population: usize, removed: usize, spawned: usize) {
        self.tick_count.fetch_add(1, Ordering::Relaxed);
        self.population.store(population as u64, Ordering::Relaxed);
        self.removed_total.fetch_add(removed as u64, Ordering::Relaxed);
        self.spawned_total.fetch_add(spawned as u64, Ordering::Relaxed);

        // Log at info level every 1000 ticks
        let tick = self.tick_count.load(Ordering::Relaxed);
        if tick % 1000 == 0 {
            tracing::info!(
                tick = tick,
                population = population,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters
            .entry(name.to_string())
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Gets the current tick count.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    /// Gets the population recorded at the last tick.
    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    /// Total entities removed across all ticks.
    #[must_use]
    pub fn removed_total(&self) -> u64 {
        self.removed_total.load(Ordering::Relaxed)
    }

    /// Total entities spawned beyond simple continuation across all ticks.
    #[must_use]
    pub fn spawned_total(&self) -> u64 {
        self.spawned_total.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Logs a one-shot summary of the run so far.
    pub fn log_summary(&self) {
        let elapsed = self.elapsed();
        let ticks = self.tick_count();
        let avg_tps = ticks as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
        tracing::info!(
            ticks = ticks,
            population = self.population(),
            removed_total = self.removed_total(),
            spawned_total = self.spawned_total(),
            elapsed_s = elapsed.as_secs(),
            avg_tps = format!("{avg_tps:.1}"),
            "Run summary"
        );
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
