//! Behavioral model seam for steered entities.
//!
//! The engine never looks inside a behavioral model; it only requires that
//! a per-entity decide step accept sensed inputs and produce steering
//! outputs. `CellBrain` is the reference model: a weighted passthrough of
//! distance and relative angle, clamped downstream by the cell kinematics.

use petri_data::{Position, Rotation};
use serde::{Deserialize, Serialize};

/// Sensed inputs for one decide step.
#[derive(Debug, Clone, Copy, Default)]
pub struct BehaviorInput {
    /// Distance to the attended target, world units.
    pub distance: f64,
    /// Relative angle to the target in (-180, 180] degrees.
    pub angle: f64,
}

/// Steering outputs of one decide step, clamped by the consumer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteeringOutput {
    pub linear_acceleration: f64,
    pub angular_acceleration: f64,
}

/// The decide step every behavioral model must implement.
pub trait BehaviorModel {
    fn decide(&mut self, input: BehaviorInput) -> SteeringOutput;
}

/// Reference cell brain: accelerate proportionally to target distance, turn
/// proportionally to the relative angle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellBrain {
    pub distance_weight: f64,
    pub angle_weight: f64,
}

impl Default for CellBrain {
    fn default() -> Self {
        Self {
            distance_weight: 1.0,
            angle_weight: 0.5,
        }
    }
}

impl BehaviorModel for CellBrain {
    fn decide(&mut self, input: BehaviorInput) -> SteeringOutput {
        SteeringOutput {
            linear_acceleration: input.distance * self.distance_weight,
            angular_acceleration: input.angle * self.angle_weight,
        }
    }
}

/// Relative angle from a heading at `from` to the target position, folded
/// into (-180, 180] degrees.
#[must_use]
pub fn relative_angle_deg(from: &Position, heading_deg: f64, to: &Position) -> f64 {
    Rotation::new(from.bearing_deg(to) - heading_deg)
        .normalized()
        .angle
}
