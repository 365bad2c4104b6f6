//! Food: decays over time, decays faster when crowded, and occasionally
//! duplicates itself nearby.

use crate::config::FoodConfig;
use crate::objects::{TickOutcome, WorldObject};
use petri_data::{EntityCommon, EntityId, Position, Rotation};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Growth chance in percent for a given effective decay rate.
///
/// Steep exponential: slow-decaying food in sparse surroundings duplicates
/// readily, crowded fast-decaying food almost never does. The 0.1 floor
/// keeps growth possible everywhere.
#[must_use]
pub fn chance_to_grow(effective_decay_rate: f64) -> f64 {
    2f64.powf(-20.0 * (effective_decay_rate - 1.0)) * 12.5 + 0.1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub common: EntityCommon,
    pub decay: f64,
    pub decay_rate: f64,
    pub max_decay: f64,
    /// Neighbor count observed at the last update.
    pub neighbors_seen: usize,
}

impl Food {
    /// Creates food with a freshly drawn random id.
    #[must_use]
    pub fn new(position: Position, config: &FoodConfig) -> Self {
        Self::with_id(EntityId::new(), position, config)
    }

    /// Creates food with an id drawn from `rng`, keeping identities
    /// reproducible under a fixed world seed.
    #[must_use]
    pub fn new_with_rng<R: Rng>(position: Position, config: &FoodConfig, rng: &mut R) -> Self {
        Self::with_id(EntityId::from_u128(rng.gen()), position, config)
    }

    #[must_use]
    pub fn with_id(id: EntityId, position: Position, config: &FoodConfig) -> Self {
        Self {
            common: EntityCommon::new(
                id,
                position,
                Rotation::new(0.0),
                config.interaction_radius,
                config.max_visual_width,
            ),
            decay: 0.0,
            decay_rate: config.decay_rate,
            max_decay: config.max_decay,
            neighbors_seen: 0,
        }
    }

    /// Spawns a duplicate jittered within this food's interaction radius.
    fn offspring<R: Rng>(&self, rng: &mut R) -> Food {
        let jitter = self.common.interaction_radius;
        let position = Position::new(
            self.common.position.x + rng.gen_range(-jitter..=jitter),
            self.common.position.y + rng.gen_range(-jitter..=jitter),
        );
        let config = FoodConfig {
            decay_rate: self.decay_rate,
            max_decay: self.max_decay,
            interaction_radius: self.common.interaction_radius,
            max_visual_width: self.common.max_visual_width,
        };
        Food::new_with_rng(position, &config, rng)
    }

    /// Fraction of the decay budget consumed, in [0, 1]. Exposed for the
    /// rendering layer's color ramp.
    #[must_use]
    pub fn decay_fraction(&self) -> f64 {
        if self.max_decay > 0.0 {
            self.decay / self.max_decay
        } else {
            0.0
        }
    }

    pub fn update<R: Rng>(mut self, neighbors: &[&WorldObject], rng: &mut R) -> TickOutcome {
        self.neighbors_seen = neighbors.len();

        // Crowding accelerates decay.
        let effective_rate = self.decay_rate * (1.0 + self.neighbors_seen as f64 / 10.0);
        self.decay += effective_rate;
        if self.decay > self.max_decay {
            self.decay = self.max_decay;
            self.common.flags.death = true;
        }

        if rng.gen::<f64>() < chance_to_grow(effective_rate) / 100.0 {
            let offspring = self.offspring(rng);
            return TickOutcome::Spawn(vec![
                WorldObject::Food(self),
                WorldObject::Food(offspring),
            ]);
        }

        TickOutcome::Keep(WorldObject::Food(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn config() -> FoodConfig {
        FoodConfig::default()
    }

    #[test]
    fn test_decay_accumulates_without_neighbors() {
        let food = Food::new(Position::new(0.0, 0.0), &config());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        match food.update(&[], &mut rng) {
            TickOutcome::Keep(WorldObject::Food(f)) => assert_eq!(f.decay, 1.0),
            TickOutcome::Spawn(list) => match &list[0] {
                WorldObject::Food(f) => assert_eq!(f.decay, 1.0),
                other => panic!("unexpected parent kind {}", other.kind()),
            },
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn test_fully_decayed_food_flags_death() {
        let mut food = Food::new(Position::new(0.0, 0.0), &config());
        food.decay = food.max_decay;
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let outcome = food.update(&[], &mut rng);
        let parent = match &outcome {
            TickOutcome::Keep(o) => o,
            TickOutcome::Spawn(list) => &list[0],
            TickOutcome::Remove => panic!("food never removes itself directly"),
        };
        assert!(parent.is_dead());
    }

    #[test]
    fn test_zero_decay_rate_always_duplicates() {
        // chance_to_grow(0) is astronomically above 100%.
        let mut cfg = config();
        cfg.decay_rate = 0.0;
        let food = Food::new(Position::new(0.0, 0.0), &cfg);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        match food.update(&[], &mut rng) {
            TickOutcome::Spawn(list) => assert_eq!(list.len(), 2),
            other => panic!("expected reproduction, got {other:?}"),
        }
    }

    #[test]
    fn test_growth_chance_curve() {
        assert!((chance_to_grow(1.0) - 12.6).abs() < 1e-9);
        assert!(chance_to_grow(2.0) < 0.2);
        assert!(chance_to_grow(0.5) > 100.0);
    }
}
