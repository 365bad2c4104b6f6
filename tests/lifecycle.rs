//! Tick lifecycle: removal, reproduction, neighbor visibility.

mod common;

use common::{beacon_at, drifter_at, fertile_food_at, food_at, mark_dead, WorldBuilder};
use petri_core::objects::WorldObject;
use std::sync::atomic::Ordering;

#[test]
fn test_death_flagged_entity_is_dropped_before_update() {
    let mut world = WorldBuilder::new().build();
    world.add_object(mark_dead(beacon_at(0.0, 0.0))).unwrap();
    world.add_object(beacon_at(5.0, 0.0)).unwrap();

    let report = world.advance_tick().unwrap();
    assert_eq!(report.processed, 2);
    assert_eq!(report.removed, 1);
    assert_eq!(world.len(), 1);
}

#[test]
fn test_reproduction_fans_out_into_next_generation() {
    let mut world = WorldBuilder::new().with_partition_size(10.0).build();
    world.add_object(fertile_food_at(0.0, 0.0, 1.0)).unwrap();

    let report = world.advance_tick().unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.inserted, 2);
    assert_eq!(report.spawned(), 1);
    assert_eq!(world.len(), 2);

    // Both successors are hashed under their own positions.
    assert_eq!(world.query_objects_within_radius(0.0, 0.0, 5.0).len(), 2);
}

#[test]
fn test_repeated_reproduction_compounds() {
    let mut world = WorldBuilder::new().build();
    world.add_object(fertile_food_at(0.0, 0.0, 1.0)).unwrap();

    world.advance_tick().unwrap();
    world.advance_tick().unwrap();
    world.advance_tick().unwrap();
    assert_eq!(world.len(), 8);
}

#[test]
fn test_death_flagged_entity_is_invisible_to_neighbors() {
    // The dead beacon is both dropped and excluded from the live beacon's
    // neighbor list within the same tick.
    let mut world = WorldBuilder::new().build();
    world.add_object(beacon_at(0.0, 0.0)).unwrap();
    world.add_object(mark_dead(beacon_at(5.0, 0.0))).unwrap();

    world.advance_tick().unwrap();
    assert_eq!(world.len(), 1);
    let beacon = world
        .get_objects()
        .into_iter()
        .find_map(|o| match o {
            WorldObject::Beacon(b) => Some(b),
            _ => None,
        })
        .unwrap();
    assert_eq!(beacon.neighbor_count, 0);
}

#[test]
fn test_dying_food_does_not_inflate_neighbor_crowding() {
    // Food that flagged death stops counting toward the crowding that
    // accelerates its neighbors' decay.
    let mut world = WorldBuilder::new().build();
    world.add_object(food_at(0.0, 0.0)).unwrap();
    world.add_object(mark_dead(food_at(1.0, 0.0))).unwrap();

    world.advance_tick().unwrap();
    // The updated survivor decayed at the uncrowded base rate; a counted
    // dead neighbor would have pushed it to 1.1.
    let foods: Vec<_> = world
        .get_objects()
        .into_iter()
        .filter_map(|o| match o {
            WorldObject::Food(f) => Some(f),
            _ => None,
        })
        .collect();
    assert!(foods.iter().all(|f| f.neighbors_seen == 0));
    assert!(foods.iter().any(|f| f.decay == 1.0));
}

#[test]
fn test_neighbor_query_excludes_self_by_identity() {
    // Two beacons at the exact same position: position-based exclusion
    // would hide both, identity-based exclusion shows exactly the other.
    let mut world = WorldBuilder::new().build();
    world.add_object(beacon_at(0.0, 0.0)).unwrap();
    world.add_object(beacon_at(0.0, 0.0)).unwrap();

    world.advance_tick().unwrap();
    for object in world.get_objects() {
        match object {
            WorldObject::Beacon(b) => assert_eq!(b.neighbor_count, 1),
            other => panic!("unexpected kind {}", other.kind()),
        }
    }
}

#[test]
fn test_beacon_sees_neighbors_within_its_radius_only() {
    let mut world = WorldBuilder::new().build();
    world.add_object(beacon_at(0.0, 0.0)).unwrap();
    world.add_object(drifter_at(30.0, 0.0, 0.0, 0.0)).unwrap();
    world.add_object(drifter_at(100.0, 0.0, 0.0, 0.0)).unwrap();

    world.advance_tick().unwrap();
    let beacon = world
        .get_objects()
        .into_iter()
        .find_map(|o| match o {
            WorldObject::Beacon(b) => Some(b),
            _ => None,
        })
        .unwrap();
    assert_eq!(beacon.neighbor_count, 1);
}

#[test]
fn test_moving_entity_is_rehashed_across_cells() {
    let mut world = WorldBuilder::new().with_partition_size(10.0).build();
    world.add_object(drifter_at(9.0, 0.0, 2.0, 0.0)).unwrap();

    world.advance_tick().unwrap();
    let p = world.get_objects()[0].position();
    assert_eq!(p.x, 11.0);

    // Queryable at the new location, absent at the old one.
    assert_eq!(world.query_objects_within_radius(11.0, 0.0, 0.5).len(), 1);
    assert_eq!(world.query_objects_within_radius(9.0, 0.0, 0.5).len(), 0);
}

#[test]
fn test_metrics_count_removals_and_reproductions_by_kind() {
    let mut world = WorldBuilder::new().build();
    world.add_object(mark_dead(beacon_at(0.0, 0.0))).unwrap();
    world.add_object(fertile_food_at(50.0, 50.0, 1.0)).unwrap();

    world.advance_tick().unwrap();
    let counters = world.metrics.counters.lock().unwrap();
    assert_eq!(counters["removed.beacon"].load(Ordering::Relaxed), 1);
    assert_eq!(counters["reproductions.food"].load(Ordering::Relaxed), 1);
}

#[test]
fn test_tick_increments_generation_counter() {
    let mut world = WorldBuilder::new().build();
    world.add_object(beacon_at(0.0, 0.0)).unwrap();
    assert_eq!(world.tick, 0);
    world.advance_tick().unwrap();
    world.tick_all().unwrap();
    assert_eq!(world.tick, 2);
}

#[test]
fn test_updates_observe_the_pre_tick_snapshot() {
    // The drifter moves out of beacon range this tick, but every update
    // runs against the pre-tick positions, so the beacon still sees it.
    let mut world = WorldBuilder::new().build();
    world.add_object(beacon_at(0.0, 0.0)).unwrap();
    world.add_object(drifter_at(45.0, 0.0, 50.0, 0.0)).unwrap();

    world.advance_tick().unwrap();
    let beacon = world
        .get_objects()
        .into_iter()
        .find_map(|o| match o {
            WorldObject::Beacon(b) => Some(b),
            _ => None,
        })
        .unwrap();
    assert_eq!(beacon.neighbor_count, 1);

    world.advance_tick().unwrap();
    let beacon = world
        .get_objects()
        .into_iter()
        .find_map(|o| match o {
            WorldObject::Beacon(b) => Some(b),
            _ => None,
        })
        .unwrap();
    assert_eq!(beacon.neighbor_count, 0);
}
