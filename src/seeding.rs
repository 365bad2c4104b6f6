//! Initial population placement.

use anyhow::Result;
use petri_core::objects::{Cell, Drifter, Food, WorldObject};
use petri_core::world::World;
use petri_data::{Position, Rotation};
use rand::Rng;

/// Seeds the world per its configuration: food and drifters scattered
/// uniformly around the origin, cells at the origin itself.
///
/// Returns the number of objects placed. Draws only from the world's own
/// RNG, so a fixed seed fixes the starting layout.
pub fn populate(world: &mut World) -> Result<usize> {
    let config = world.config.clone();
    let spread = config.world.spawn_spread;
    let mut placed = 0;

    for _ in 0..config.world.initial_food {
        let position = scatter(world, spread);
        let food = Food::new_with_rng(position, &config.food, &mut world.rng);
        world.add_object(WorldObject::Food(food))?;
        placed += 1;
    }

    for _ in 0..config.world.initial_drifters {
        let position = scatter(world, spread);
        let drifter = Drifter::new_with_rng(position, &mut world.rng);
        world.add_object(WorldObject::Drifter(drifter))?;
        placed += 1;
    }

    for _ in 0..config.world.initial_cells {
        let cell = Cell::new_with_rng(
            Position::new(0.0, 0.0),
            Rotation::new(0.0),
            &config.cell,
            &mut world.rng,
        );
        world.add_object(WorldObject::Cell(cell))?;
        placed += 1;
    }

    tracing::info!(placed = placed, "World seeded");
    Ok(placed)
}

fn scatter(world: &mut World, spread: f64) -> Position {
    if spread <= 0.0 {
        return Position::new(0.0, 0.0);
    }
    Position::new(
        world.rng.gen_range(-spread..=spread),
        world.rng.gen_range(-spread..=spread),
    )
}
