//! Shared builders for integration tests.

#![allow(dead_code)]

use petri_core::config::{AppConfig, FoodConfig};
use petri_core::objects::{Beacon, Drifter, Food, WorldObject};
use petri_core::world::World;
use petri_data::Position;

/// Builder for worlds with test-friendly settings.
pub struct WorldBuilder {
    config: AppConfig,
}

impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.seed = Some(42);
        Self { config }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_partition_size(mut self, partition_size: f64) -> Self {
        self.config.world.partition_size = partition_size;
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.config.world.bounded = false;
        self
    }

    pub fn with_extent(mut self, width: f64, height: f64) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn build(self) -> World {
        World::new(self.config).expect("test config must be valid")
    }
}

impl Default for WorldBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Stationary probe at `(x, y)`.
pub fn beacon_at(x: f64, y: f64) -> WorldObject {
    WorldObject::Beacon(Beacon::new(Position::new(x, y)))
}

/// Food at `(x, y)` with default tuning.
pub fn food_at(x: f64, y: f64) -> WorldObject {
    WorldObject::Food(Food::new(Position::new(x, y), &FoodConfig::default()))
}

/// Food that duplicates every tick, jittering offspring within `jitter`.
pub fn fertile_food_at(x: f64, y: f64, jitter: f64) -> WorldObject {
    let config = FoodConfig {
        decay_rate: 0.0,
        interaction_radius: jitter,
        ..FoodConfig::default()
    };
    WorldObject::Food(Food::new(Position::new(x, y), &config))
}

/// Drifter with a fixed velocity, consuming no RNG state.
pub fn drifter_at(x: f64, y: f64, vx: f64, vy: f64) -> WorldObject {
    WorldObject::Drifter(Drifter::with_velocity(Position::new(x, y), (vx, vy)))
}

/// Marks the object dead before it ever ticks.
pub fn mark_dead(mut object: WorldObject) -> WorldObject {
    object.common_mut().flags.death = true;
    object
}
