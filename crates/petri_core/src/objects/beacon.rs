//! Beacon: a stationary probe that counts its neighbors each tick.
//! Diagnostics and tests read the count back after the tick.

use crate::objects::{TickOutcome, WorldObject};
use petri_data::{EntityCommon, EntityId, Position, Rotation};
use rand::Rng;
use serde::{Deserialize, Serialize};

const DEFAULT_RADIUS: f64 = 5.0;
const INTERACTION_RADIUS: f64 = 50.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beacon {
    pub common: EntityCommon,
    pub radius: f64,
    pub neighbor_count: usize,
}

impl Beacon {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self::with_radius(position, DEFAULT_RADIUS)
    }

    #[must_use]
    pub fn with_radius(position: Position, radius: f64) -> Self {
        Self {
            common: EntityCommon::new(
                EntityId::new(),
                position,
                Rotation::new(0.0),
                INTERACTION_RADIUS,
                radius * 2.0,
            ),
            radius,
            neighbor_count: 0,
        }
    }

    pub fn update<R: Rng>(mut self, neighbors: &[&WorldObject], _rng: &mut R) -> TickOutcome {
        self.neighbor_count = neighbors.len();
        TickOutcome::Keep(WorldObject::Beacon(self))
    }
}
