//! Headless tick loop with wall-clock pacing.

use anyhow::Result;
use petri_core::world::World;
use std::time::{Duration, Instant};

/// Aggregate outcome of a headless run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    pub ticks: u64,
    pub final_population: usize,
    pub removed_total: usize,
    pub inserted_total: usize,
}

/// Runs the world for up to `max_ticks` ticks.
///
/// `tps` is the target tick rate; `0` means unpaced (tick as fast as the
/// loop allows). When the simulation falls behind the target rate the loop
/// catches up by running several ticks back to back rather than letting
/// the schedule drift. Stops early when the world empties out.
pub fn run_headless(world: &mut World, max_ticks: u64, tps: u32) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut last_report = Instant::now();
    let mut ticks_since_report = 0u64;

    if tps == 0 {
        while summary.ticks < max_ticks && !world.is_empty() {
            let report = world.advance_tick()?;
            summary.ticks += 1;
            summary.removed_total += report.removed;
            summary.inserted_total += report.inserted;
        }
        summary.final_population = world.len();
        return Ok(summary);
    }

    let tick_interval = Duration::from_secs(1) / tps;
    let mut next_tick = Instant::now();

    while summary.ticks < max_ticks {
        if world.is_empty() {
            tracing::info!(tick = world.tick, "World is empty, stopping");
            break;
        }

        // Catch up on missed ticks instead of letting the schedule slip.
        while Instant::now() >= next_tick && summary.ticks < max_ticks {
            let report = world.advance_tick()?;
            summary.ticks += 1;
            ticks_since_report += 1;
            summary.removed_total += report.removed;
            summary.inserted_total += report.inserted;
            next_tick += tick_interval;
        }

        if last_report.elapsed() >= Duration::from_secs(1) {
            let actual_tps = ticks_since_report as f64 / last_report.elapsed().as_secs_f64();
            tracing::info!(
                tick = world.tick,
                population = world.len(),
                tps = format!("{actual_tps:.1}"),
                "Running"
            );
            last_report = Instant::now();
            ticks_since_report = 0;
        }

        std::thread::sleep(Duration::from_millis(1));
    }

    summary.final_population = world.len();
    Ok(summary)
}
