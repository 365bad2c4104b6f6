//! Plain data types shared across the Petri simulation layers.
//!
//! This crate holds the dumb, serializable state every layer agrees on:
//! positions, headings, identity, and the per-entity flags the world engine
//! reads during a tick. It carries no behavior beyond small geometric
//! helpers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identity of a world object.
///
/// Self-exclusion during neighbor queries compares ids, never positions:
/// two objects may legitimately share exact coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(Uuid);

impl EntityId {
    /// Creates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an id from raw bits. Used with a seeded RNG so that entity
    /// identities are reproducible across runs with the same world seed.
    #[must_use]
    pub fn from_u128(bits: u128) -> Self {
        Self(Uuid::from_u128(bits))
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

/// World position of an entity, in world units. f64 throughout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance. Preferred in hot paths and for
    /// tie-free minimum tracking.
    #[must_use]
    pub fn distance_sq(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    #[must_use]
    pub fn distance(&self, other: &Position) -> f64 {
        self.distance_sq(other).sqrt()
    }

    /// Absolute bearing from this position to `other`, in degrees.
    #[must_use]
    pub fn bearing_deg(&self, other: &Position) -> f64 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Heading in degrees.
///
/// Normalization convention: (-180, 180]. The stored angle is free-running
/// (integration may push it outside the window); `normalized` brings it back
/// when a comparison needs the canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rotation {
    pub angle: f64,
}

impl Rotation {
    #[must_use]
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Returns the heading folded into (-180, 180].
    #[must_use]
    pub fn normalized(&self) -> Self {
        let mut a = self.angle.rem_euclid(360.0);
        if a > 180.0 {
            a -= 360.0;
        }
        Self { angle: a }
    }
}

/// Per-entity flags read by the world engine each tick.
///
/// `death` is set by the entity itself to request removal; the engine
/// observes it before the update and skips the entity. `can_interact` gates
/// whether a neighbor list is computed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityFlags {
    pub death: bool,
    pub can_interact: bool,
}

impl Default for EntityFlags {
    fn default() -> Self {
        Self {
            death: false,
            can_interact: true,
        }
    }
}

/// State shared by every entity kind: identity, pose, interaction gating,
/// and the visual width consumed only by external rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCommon {
    pub id: EntityId,
    pub position: Position,
    pub rotation: Rotation,
    /// Neighbor query radius in world units; 0 means the entity never
    /// queries neighbors.
    pub interaction_radius: f64,
    pub flags: EntityFlags,
    /// Widest extent the renderer may draw for this entity. Not used by
    /// the engine itself.
    pub max_visual_width: f64,
}

impl EntityCommon {
    #[must_use]
    pub fn new(
        id: EntityId,
        position: Position,
        rotation: Rotation,
        interaction_radius: f64,
        max_visual_width: f64,
    ) -> Self {
        Self {
            id,
            position,
            rotation,
            interaction_radius,
            flags: EntityFlags::default(),
            max_visual_width,
        }
    }
}
