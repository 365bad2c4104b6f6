//! # Petri Core
//!
//! The world engine for Petri, a deterministic artificial-life simulation.
//!
//! This crate contains:
//! - Grid-based spatial indexing for proximity queries
//! - The double-buffered world store and tick state machine
//! - The closed set of entity kinds and their behavioral models
//! - Configuration, error types, and metrics/logging
//!
//! ## Architecture
//!
//! The tick consumes the current generation read-only and writes successors
//! into the next generation, then swaps. Entities never hold references to
//! each other; neighbor relations are recomputed from positions each tick.
//! All randomness flows through a single seeded RNG owned by the world, so
//! runs with the same seed and setup are reproducible.
//!
//! ## Example
//!
//! ```
//! use petri_core::config::AppConfig;
//! use petri_core::objects::{Beacon, WorldObject};
//! use petri_core::world::World;
//! use petri_data::Position;
//!
//! let mut config = AppConfig::default();
//! config.world.seed = Some(42);
//! let mut world = World::new(config).unwrap();
//! world
//!     .add_object(WorldObject::Beacon(Beacon::new(Position::new(0.0, 0.0))))
//!     .unwrap();
//! world.advance_tick().unwrap();
//! assert_eq!(world.len(), 1);
//! ```

/// Behavioral model seam and the reference cell brain
pub mod behavior;
/// Configuration management for simulation parameters
pub mod config;
/// Error types for world construction and mutation
pub mod error;
/// Grid-based spatial indexing for proximity queries
pub mod grid;
/// Metrics collection and structured logging
pub mod metrics;
/// Entity kinds and the per-tick lifecycle contract
pub mod objects;
/// Double-buffered world store and tick state machine
pub mod world;

pub use behavior::{BehaviorInput, BehaviorModel, CellBrain, SteeringOutput};
pub use config::AppConfig;
pub use error::{Result, WorldError};
pub use metrics::{init_logging, Metrics};
pub use objects::{TickOutcome, WorldObject};
pub use world::{TickReport, World};
