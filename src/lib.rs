//! Petri: a deterministic artificial-life world simulation.
//!
//! The engine lives in `petri_core`; this crate adds the host-side pieces:
//! seeding the initial population and driving the wall-clock tick loop.

pub mod runner;
pub mod seeding;

pub use petri_core::config::AppConfig;
pub use petri_core::objects::{Beacon, Cell, Drifter, Food, TickOutcome, WorldObject};
pub use petri_core::world::{TickReport, World};
pub use petri_core::{init_logging, WorldError};
pub use petri_data::{EntityId, Position, Rotation};
