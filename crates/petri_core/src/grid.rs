//! Spatial indexing structure for proximity queries on entity positions.
//!
//! A uniform grid hash: world space is partitioned into square cells of
//! `partition_size` world units and entities are stored in per-cell lists
//! keyed by integer cell coordinates. Unlike a bounded offset-array layout,
//! the map form places no limit on world extent and costs nothing for empty
//! regions, which matters because positions may be negative and unbounded.
//!
//! Cell hashing floors toward negative infinity, so coordinates on either
//! side of an axis hash consistently: -0.1 lands in cell -1, not cell 0.
//!
//! There is no removal primitive. The world store rebuilds the next
//! generation's grid from scratch each tick and only ever clears this one,
//! keeping the allocated per-cell lists for reuse.

use crate::objects::WorldObject;
use petri_data::{EntityId, Position};
use std::collections::HashMap;

/// Integer cell coordinates of the uniform grid.
pub type CellCoord = (i64, i64);

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    partition_size: f64,
    cells: HashMap<CellCoord, Vec<WorldObject>>,
    len: usize,
}

impl SpatialGrid {
    /// Creates an empty grid. The caller validates `partition_size > 0`.
    #[must_use]
    pub fn new(partition_size: f64) -> Self {
        Self {
            partition_size,
            cells: HashMap::new(),
            len: 0,
        }
    }

    #[must_use]
    pub fn partition_size(&self) -> f64 {
        self.partition_size
    }

    /// Cell containing `position`. Floor division, not truncation.
    #[inline]
    #[must_use]
    pub fn cell_of(&self, position: Position) -> CellCoord {
        (
            (position.x / self.partition_size).floor() as i64,
            (position.y / self.partition_size).floor() as i64,
        )
    }

    /// Appends the object to the list at its cell, creating the list if
    /// absent.
    pub fn insert(&mut self, object: WorldObject) {
        let key = self.cell_of(object.position());
        self.cells.entry(key).or_default().push(object);
        self.len += 1;
    }

    /// Empties every cell list without releasing their storage.
    pub fn clear(&mut self) {
        for list in self.cells.values_mut() {
            list.clear();
        }
        self.len = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All objects, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &WorldObject> {
        self.cells.values().flatten()
    }

    /// Coordinates of every non-empty cell, in unspecified order.
    pub fn occupied_cells(&self) -> Vec<CellCoord> {
        self.cells
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(coord, _)| *coord)
            .collect()
    }

    /// Objects stored at exactly `coord`.
    #[must_use]
    pub fn cell(&self, coord: CellCoord) -> &[WorldObject] {
        self.cells.get(&coord).map_or(&[], Vec::as_slice)
    }

    /// All objects within Euclidean distance `radius` of `(x, y)`.
    ///
    /// Scans every cell within `ceil(radius / partition_size) + 1` cells of
    /// the center cell on each axis; sparse cells contribute nothing but
    /// are never assumed empty without a lookup.
    #[must_use]
    pub fn query_radius(&self, x: f64, y: f64, radius: f64) -> Vec<&WorldObject> {
        self.query_radius_filtered(x, y, radius, None)
    }

    /// Radius query that excludes one identity. Exclusion is by id, never
    /// by position: distinct objects may share exact coordinates.
    #[must_use]
    pub fn query_radius_excluding(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        exclude: EntityId,
    ) -> Vec<&WorldObject> {
        self.query_radius_filtered(x, y, radius, Some(exclude))
    }

    fn query_radius_filtered(
        &self,
        x: f64,
        y: f64,
        radius: f64,
        exclude: Option<EntityId>,
    ) -> Vec<&WorldObject> {
        let mut result = Vec::new();
        if !radius.is_finite() || radius < 0.0 {
            return result;
        }

        let center = Position::new(x, y);
        let (ccx, ccy) = self.cell_of(center);
        let span = (radius / self.partition_size).ceil() as i64 + 1;
        let radius_sq = radius * radius;

        for cy in (ccy - span)..=(ccy + span) {
            for cx in (ccx - span)..=(ccx + span) {
                let Some(list) = self.cells.get(&(cx, cy)) else {
                    continue;
                };
                for object in list {
                    if exclude.is_some_and(|id| object.id() == id) {
                        continue;
                    }
                    if center.distance_sq(&object.position()) <= radius_sq {
                        result.push(object);
                    }
                }
            }
        }
        result
    }

    /// All objects whose position lies within the axis-aligned rectangle,
    /// inclusive on every edge. Corner order does not matter.
    #[must_use]
    pub fn query_rect(&self, x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<&WorldObject> {
        let (min_x, max_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };

        let (min_cx, min_cy) = self.cell_of(Position::new(min_x, min_y));
        let (max_cx, max_cy) = self.cell_of(Position::new(max_x, max_y));

        let mut result = Vec::new();
        for cy in min_cy..=max_cy {
            for cx in min_cx..=max_cx {
                let Some(list) = self.cells.get(&(cx, cy)) else {
                    continue;
                };
                for object in list {
                    let p = object.position();
                    if p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y {
                        result.push(object);
                    }
                }
            }
        }
        result
    }

    /// Object closest to `(x, y)` by Euclidean distance, or `None` on an
    /// empty grid. Linear scan; ties go to the first encountered in
    /// iteration order, which callers must not rely on.
    #[must_use]
    pub fn closest(&self, x: f64, y: f64) -> Option<&WorldObject> {
        let from = Position::new(x, y);
        let mut best: Option<(&WorldObject, f64)> = None;
        for object in self.iter() {
            let d = from.distance_sq(&object.position());
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((object, d));
            }
        }
        best.map(|(object, _)| object)
    }
}
