//! Drifter: moves with a fixed velocity picked at creation. Useful for
//! exercising cross-cell re-hashing and as inert traffic in scenarios.

use crate::objects::{TickOutcome, WorldObject};
use petri_data::{EntityCommon, EntityId, Position, Rotation};
use rand::Rng;
use serde::{Deserialize, Serialize};

const INTERACTION_RADIUS: f64 = 50.0;
const MAX_VISUAL_WIDTH: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drifter {
    pub common: EntityCommon,
    pub velocity: (f64, f64),
}

impl Drifter {
    /// Creates a drifter with a random heading and velocity drawn from `rng`.
    #[must_use]
    pub fn new_with_rng<R: Rng>(position: Position, rng: &mut R) -> Self {
        let id = EntityId::from_u128(rng.gen());
        let rotation = Rotation::new(rng.gen_range(0.0..360.0));
        let velocity = (rng.gen_range(-0.1..0.5), rng.gen_range(-0.1..0.5));
        Self::from_parts(id, position, rotation, velocity)
    }

    /// Creates a drifter with an explicit velocity. Deterministic; used by
    /// tests that must not consume RNG state.
    #[must_use]
    pub fn with_velocity(position: Position, velocity: (f64, f64)) -> Self {
        Self::from_parts(EntityId::new(), position, Rotation::new(0.0), velocity)
    }

    fn from_parts(
        id: EntityId,
        position: Position,
        rotation: Rotation,
        velocity: (f64, f64),
    ) -> Self {
        Self {
            common: EntityCommon::new(
                id,
                position,
                rotation,
                INTERACTION_RADIUS,
                MAX_VISUAL_WIDTH,
            ),
            velocity,
        }
    }

    pub fn update<R: Rng>(mut self, _neighbors: &[&WorldObject], _rng: &mut R) -> TickOutcome {
        self.common.position.x += self.velocity.0;
        self.common.position.y += self.velocity.1;
        TickOutcome::Keep(WorldObject::Drifter(self))
    }
}
