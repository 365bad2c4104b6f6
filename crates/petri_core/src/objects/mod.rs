//! Entity kinds and the lifecycle contract the world engine ticks against.
//!
//! Entities form a closed set of variants rather than an open trait-object
//! hierarchy: the engine matches on `WorldObject` and each kind owns its
//! update logic. An update consumes the pre-tick value and returns a
//! `TickOutcome`; the world fans the successors into the next generation.

pub mod beacon;
pub mod cell;
pub mod drifter;
pub mod food;

pub use beacon::Beacon;
pub use cell::Cell;
pub use drifter::Drifter;
pub use food::Food;

use petri_data::{EntityCommon, EntityId, Position, Rotation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Result of one entity update.
///
/// `Remove` drops the entity from the next generation. `Keep` is the normal
/// continuation. `Spawn` is reproduction: the parent is only carried forward
/// if the entity logic includes it in the list — the engine never preserves
/// it implicitly. Anything outside these three shapes cannot be expressed,
/// which is how the engine rejects malformed update results.
#[derive(Debug, Clone)]
pub enum TickOutcome {
    Remove,
    Keep(WorldObject),
    Spawn(Vec<WorldObject>),
}

/// The unit of simulation: one of the known entity kinds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WorldObject {
    Food(Food),
    Cell(Cell),
    Drifter(Drifter),
    Beacon(Beacon),
}

impl WorldObject {
    #[must_use]
    pub fn common(&self) -> &EntityCommon {
        match self {
            WorldObject::Food(o) => &o.common,
            WorldObject::Cell(o) => &o.common,
            WorldObject::Drifter(o) => &o.common,
            WorldObject::Beacon(o) => &o.common,
        }
    }

    #[must_use]
    pub fn common_mut(&mut self) -> &mut EntityCommon {
        match self {
            WorldObject::Food(o) => &mut o.common,
            WorldObject::Cell(o) => &mut o.common,
            WorldObject::Drifter(o) => &mut o.common,
            WorldObject::Beacon(o) => &mut o.common,
        }
    }

    #[must_use]
    pub fn id(&self) -> EntityId {
        self.common().id
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.common().position
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.common().rotation
    }

    #[must_use]
    pub fn interaction_radius(&self) -> f64 {
        self.common().interaction_radius
    }

    #[must_use]
    pub fn can_interact(&self) -> bool {
        self.common().flags.can_interact
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.common().flags.death
    }

    /// Widest visual extent, consumed only by external rendering.
    #[must_use]
    pub fn max_visual_width(&self) -> f64 {
        self.common().max_visual_width
    }

    /// Short kind tag for logs and test assertions.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            WorldObject::Food(_) => "food",
            WorldObject::Cell(_) => "cell",
            WorldObject::Drifter(_) => "drifter",
            WorldObject::Beacon(_) => "beacon",
        }
    }

    /// Runs the entity's per-tick update.
    ///
    /// `neighbors` is the pre-tick neighbor list (already excludes this
    /// entity); it is empty when the entity does not interact. `rng` is the
    /// world's seeded generator so reproduction jitter stays reproducible.
    pub fn update<R: Rng>(self, neighbors: &[&WorldObject], rng: &mut R) -> TickOutcome {
        match self {
            WorldObject::Food(o) => o.update(neighbors, rng),
            WorldObject::Cell(o) => o.update(neighbors, rng),
            WorldObject::Drifter(o) => o.update(neighbors, rng),
            WorldObject::Beacon(o) => o.update(neighbors, rng),
        }
    }
}
