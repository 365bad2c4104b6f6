//! Double-buffered world store and the tick state machine.
//!
//! The world owns two generations of the spatial grid. Queries and external
//! readers always see the current generation; `advance_tick` consumes it and
//! writes successors into the next generation, then swaps. An update never
//! observes another update's output within the same tick, so the result is
//! independent of iteration order: every decision is made against the
//! pre-tick snapshot.
//!
//! A tick is atomic from the caller's point of view. If it fails midway
//! (a successor carrying a non-finite position), the next buffer is left
//! unswapped and the current generation stays authoritative.

use crate::config::AppConfig;
use crate::error::{Result, WorldError};
use crate::grid::SpatialGrid;
use crate::metrics::Metrics;
use crate::objects::{TickOutcome, WorldObject};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Outcome counts of one completed tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Entities of the previous generation that were examined.
    pub processed: usize,
    /// Entities dropped: death flag observed, or update returned `Remove`.
    pub removed: usize,
    /// Entities inserted into the new generation.
    pub inserted: usize,
}

impl TickReport {
    /// Entities inserted beyond one-for-one continuation.
    #[must_use]
    pub fn spawned(&self) -> usize {
        (self.inserted + self.removed).saturating_sub(self.processed)
    }
}

pub struct World {
    pub config: AppConfig,
    buffers: [SpatialGrid; 2],
    current: usize,
    pub tick: u64,
    pub rng: ChaCha8Rng,
    pub metrics: Metrics,
}

impl World {
    /// Creates an empty world.
    ///
    /// Fails with `WorldError::InvalidPartitionSize` when the configured
    /// partition size is not positive and finite.
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.world.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed = seed, "World RNG seeded");
        let partition_size = config.world.partition_size;
        Ok(Self {
            config,
            buffers: [
                SpatialGrid::new(partition_size),
                SpatialGrid::new(partition_size),
            ],
            current: 0,
            tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            metrics: Metrics::new(),
        })
    }

    #[must_use]
    pub fn partition_size(&self) -> f64 {
        self.config.world.partition_size
    }

    fn grid(&self) -> &SpatialGrid {
        &self.buffers[self.current]
    }

    /// Inserts an object into the current generation.
    ///
    /// Rejects non-finite positions always, and positions outside the
    /// configured extent when the world is bounded. The extent is centered
    /// on the origin.
    pub fn add_object(&mut self, object: WorldObject) -> Result<()> {
        let p = object.position();
        if !p.is_finite() {
            return Err(WorldError::non_finite(p.x, p.y));
        }
        if self.config.world.bounded {
            let half_w = self.config.world.width / 2.0;
            let half_h = self.config.world.height / 2.0;
            if p.x.abs() > half_w || p.y.abs() > half_h {
                return Err(WorldError::out_of_bounds(
                    p.x,
                    p.y,
                    self.config.world.width,
                    self.config.world.height,
                ));
            }
        }
        self.buffers[self.current].insert(object);
        Ok(())
    }

    /// Full snapshot of the current generation, in unspecified order.
    #[must_use]
    pub fn get_objects(&self) -> Vec<&WorldObject> {
        self.grid().iter().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.grid().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.grid().is_empty()
    }

    /// All objects within `radius` of `(x, y)` in the current generation.
    #[must_use]
    pub fn query_objects_within_radius(&self, x: f64, y: f64, radius: f64) -> Vec<&WorldObject> {
        self.grid().query_radius(x, y, radius)
    }

    /// All objects inside the inclusive rectangle in the current generation.
    #[must_use]
    pub fn query_objects_in_range(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<&WorldObject> {
        self.grid().query_rect(x1, y1, x2, y2)
    }

    /// The object closest to `(x, y)`, or `None` on an empty world.
    #[must_use]
    pub fn query_closest_object(&self, x: f64, y: f64) -> Option<&WorldObject> {
        self.grid().closest(x, y)
    }

    /// Advances the simulation by one tick.
    ///
    /// For every live entity of the current generation: compute its
    /// neighbor list of live entities against the current generation (when
    /// it interacts), run its update, and fan the successors into the next
    /// generation under their own post-update positions. Entities whose
    /// death flag is already set are skipped before their update runs and
    /// are invisible to every neighbor list that tick. After all entities
    /// are processed the buffers swap.
    ///
    /// Iteration order over cells is unspecified for callers but internally
    /// fixed (sorted cell coordinates), which keeps runs with the same seed
    /// reproducible.
    pub fn advance_tick(&mut self) -> Result<TickReport> {
        let started = Instant::now();
        let next_index = 1 - self.current;

        let (cur, next) = {
            let (left, right) = self.buffers.split_at_mut(1);
            if self.current == 0 {
                (&left[0], &mut right[0])
            } else {
                (&right[0], &mut left[0])
            }
        };
        let rng = &mut self.rng;
        let metrics = &self.metrics;

        next.clear();
        let mut report = TickReport::default();

        let mut cells = cur.occupied_cells();
        cells.sort_unstable();

        for coord in cells {
            for object in cur.cell(coord) {
                report.processed += 1;
                if object.is_dead() {
                    report.removed += 1;
                    metrics.increment_counter(&format!("removed.{}", object.kind()));
                    continue;
                }

                // Death-flagged entities are already doomed this tick and
                // must not be seen by their neighbors either.
                let radius = object.interaction_radius();
                let neighbors: Vec<&WorldObject> = if object.can_interact() && radius > 0.0 {
                    let p = object.position();
                    cur.query_radius_excluding(p.x, p.y, radius, object.id())
                        .into_iter()
                        .filter(|n| !n.is_dead())
                        .collect()
                } else {
                    Vec::new()
                };

                let kind = object.kind();
                match object.clone().update(&neighbors, rng) {
                    TickOutcome::Remove => {
                        report.removed += 1;
                        metrics.increment_counter(&format!("removed.{kind}"));
                    }
                    TickOutcome::Keep(successor) => {
                        Self::insert_successor(next, successor, &mut report)?;
                    }
                    TickOutcome::Spawn(successors) => {
                        metrics.increment_counter(&format!("reproductions.{kind}"));
                        for successor in successors {
                            Self::insert_successor(next, successor, &mut report)?;
                        }
                    }
                }
            }
        }

        self.current = next_index;
        self.tick += 1;
        self.metrics.record_tick(
            started.elapsed(),
            report.inserted,
            report.removed,
            report.spawned(),
        );
        Ok(report)
    }

    /// Alias for `advance_tick`, matching the external interface name.
    pub fn tick_all(&mut self) -> Result<TickReport> {
        self.advance_tick()
    }

    fn insert_successor(
        next: &mut SpatialGrid,
        successor: WorldObject,
        report: &mut TickReport,
    ) -> Result<()> {
        let p = successor.position();
        if !p.is_finite() {
            // Entity logic produced garbage; surface it instead of hashing
            // a NaN into the grid. The tick is not swapped in.
            return Err(WorldError::non_finite(p.x, p.y));
        }
        next.insert(successor);
        report.inserted += 1;
        Ok(())
    }
}
