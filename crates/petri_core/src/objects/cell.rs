//! Cell: a steered organism that hunts the nearest food.
//!
//! Each tick the cell senses the closest food among its neighbors, feeds
//! distance and relative angle to its behavioral model, and integrates the
//! clamped steering output into velocity, position, and heading.

use crate::behavior::{relative_angle_deg, BehaviorInput, BehaviorModel, CellBrain};
use crate::config::CellConfig;
use crate::objects::{TickOutcome, WorldObject};
use petri_data::{EntityCommon, EntityId, Position, Rotation};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cell {
    pub common: EntityCommon,
    pub velocity: (f64, f64),
    pub acceleration: (f64, f64),
    /// Degrees per tick.
    pub turn_rate: f64,
    pub angular_acceleration: f64,
    pub brain: CellBrain,
    limits: CellConfig,
}

impl Cell {
    #[must_use]
    pub fn new(position: Position, rotation: Rotation, config: &CellConfig) -> Self {
        Self::with_id(EntityId::new(), position, rotation, config)
    }

    #[must_use]
    pub fn new_with_rng<R: Rng>(
        position: Position,
        rotation: Rotation,
        config: &CellConfig,
        rng: &mut R,
    ) -> Self {
        Self::with_id(EntityId::from_u128(rng.gen()), position, rotation, config)
    }

    #[must_use]
    pub fn with_id(
        id: EntityId,
        position: Position,
        rotation: Rotation,
        config: &CellConfig,
    ) -> Self {
        Self {
            common: EntityCommon::new(
                id,
                position,
                rotation,
                config.interaction_radius,
                config.max_visual_width,
            ),
            velocity: (0.0, 0.0),
            acceleration: (0.0, 0.0),
            turn_rate: 0.0,
            angular_acceleration: 0.0,
            brain: CellBrain::default(),
            limits: config.clone(),
        }
    }

    pub fn set_brain(&mut self, brain: CellBrain) {
        self.brain = brain;
    }

    /// Closest food among the neighbors, by squared distance.
    fn nearest_food<'a>(&self, neighbors: &[&'a WorldObject]) -> Option<&'a WorldObject> {
        neighbors
            .iter()
            .filter(|o| matches!(o, WorldObject::Food(_)))
            .copied()
            .min_by(|a, b| {
                let da = self.common.position.distance_sq(&a.position());
                let db = self.common.position.distance_sq(&b.position());
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    pub fn update<R: Rng>(mut self, neighbors: &[&WorldObject], _rng: &mut R) -> TickOutcome {
        // With no food in range the cell senses a phantom target at its own
        // position: zero distance (so it coasts linearly), and a relative
        // angle of minus its heading (so it steers back toward heading 0).
        let target = self
            .nearest_food(neighbors)
            .map(|food| food.position())
            .unwrap_or(self.common.position);
        let distance = self.common.position.distance(&target);
        let angle =
            relative_angle_deg(&self.common.position, self.common.rotation.angle, &target);

        let output = self.brain.decide(BehaviorInput { distance, angle });

        let linear = output.linear_acceleration.clamp(
            -self.limits.max_reverse_acceleration,
            self.limits.max_forward_acceleration,
        );
        let angular = output.angular_acceleration.clamp(
            -self.limits.max_angular_acceleration,
            self.limits.max_angular_acceleration,
        );

        // Linear acceleration acts along the current heading.
        let heading = self.common.rotation.angle.to_radians();
        self.acceleration = (linear * heading.cos(), linear * heading.sin());

        self.velocity = (
            (self.velocity.0 + self.acceleration.0)
                .clamp(-self.limits.max_speed, self.limits.max_speed),
            (self.velocity.1 + self.acceleration.1)
                .clamp(-self.limits.max_speed, self.limits.max_speed),
        );
        self.common.position.x += self.velocity.0;
        self.common.position.y += self.velocity.1;

        self.angular_acceleration = angular;
        self.turn_rate = (self.turn_rate + self.angular_acceleration)
            .clamp(-self.limits.max_turn_rate, self.limits.max_turn_rate);
        self.common.rotation = Rotation::new(self.common.rotation.angle + self.turn_rate);

        TickOutcome::Keep(WorldObject::Cell(self))
    }
}
