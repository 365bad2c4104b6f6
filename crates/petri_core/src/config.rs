//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to `config.toml`.
//! Defaults reproduce the reference tuning; a missing file is created with
//! the defaults so a fresh checkout runs out of the box.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! target_tps = 20
//!
//! [world]
//! partition_size = 20.0
//! width = 600.0
//! height = 500.0
//! seed = 42
//!
//! [food]
//! decay_rate = 1.0
//! ```

use crate::error::{Result, WorldError};
use serde::{Deserialize, Serialize};
use std::fs;

/// World-level configuration: grid granularity, extent, seeding, and the
/// initial population placed by the host.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    /// Cell edge length of the spatial grid, in world units. Must be > 0.
    pub partition_size: f64,
    /// World extent, centered on the origin. Only enforced at `add_object`
    /// when `bounded` is set; the engine itself does not need a bound.
    pub width: f64,
    pub height: f64,
    pub bounded: bool,
    /// RNG seed for reproducible runs; a random seed is drawn when absent.
    pub seed: Option<u64>,
    pub initial_food: usize,
    pub initial_drifters: usize,
    pub initial_cells: usize,
    /// Half-width of the square around the origin used for initial placement.
    pub spawn_spread: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            partition_size: 20.0,
            width: 600.0,
            height: 500.0,
            bounded: true,
            seed: None,
            initial_food: 1,
            initial_drifters: 1,
            initial_cells: 1,
            spawn_spread: 100.0,
        }
    }
}

/// Food decay and growth tuning.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FoodConfig {
    pub decay_rate: f64,
    pub max_decay: f64,
    pub interaction_radius: f64,
    pub max_visual_width: f64,
}

impl Default for FoodConfig {
    fn default() -> Self {
        Self {
            decay_rate: 1.0,
            max_decay: 200.0,
            interaction_radius: 50.0,
            max_visual_width: 10.0,
        }
    }
}

/// Cell kinematics limits and perception tuning.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CellConfig {
    pub interaction_radius: f64,
    pub max_visual_width: f64,
    /// Forward acceleration clamp, world units per tick squared.
    pub max_forward_acceleration: f64,
    /// Reverse (braking) acceleration clamp.
    pub max_reverse_acceleration: f64,
    /// Angular acceleration clamp, degrees per tick squared.
    pub max_angular_acceleration: f64,
    /// Per-axis speed clamp, world units per tick.
    pub max_speed: f64,
    /// Turn rate clamp, degrees per tick.
    pub max_turn_rate: f64,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            interaction_radius: 50.0,
            max_visual_width: 10.0,
            max_forward_acceleration: 0.02,
            max_reverse_acceleration: 0.1,
            max_angular_acceleration: 0.1,
            max_speed: 0.5,
            max_turn_rate: 0.5,
        }
    }
}

/// Top-level application configuration.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Simulation ticks per second targeted by the host loop. 0 runs unpaced.
    pub target_tps: u32,
    pub world: WorldConfig,
    pub food: FoodConfig,
    pub cell: CellConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            target_tps: 20,
            world: WorldConfig::default(),
            food: FoodConfig::default(),
            cell: CellConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads `config.toml` from the working directory, writing the defaults
    /// out when the file is missing or unreadable.
    pub fn load() -> Self {
        Self::load_from("config.toml")
    }

    /// Loads configuration from `path`, falling back to (and persisting)
    /// the defaults when the file is absent or malformed.
    pub fn load_from(path: &str) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!(path = path, error = %e, "Failed to parse config, using defaults");
                }
            }
        }
        let default = Self::default();
        if let Ok(serialized) = toml::to_string(&default) {
            let _ = fs::write(path, serialized);
        }
        default
    }

    /// Validates the parameters the engine cannot function without.
    pub fn validate(&self) -> Result<()> {
        let ps = self.world.partition_size;
        if !ps.is_finite() || ps <= 0.0 {
            return Err(WorldError::InvalidPartitionSize(ps));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_partition_size_rejected() {
        let mut config = AppConfig::default();
        config.world.partition_size = 0.0;
        assert_eq!(
            config.validate(),
            Err(WorldError::InvalidPartitionSize(0.0))
        );
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.world.partition_size, config.world.partition_size);
        assert_eq!(parsed.target_tps, config.target_tps);
    }
}
