//! Error types for the world engine.
//!
//! Entity-level logic errors are not represented here: a malformed update
//! result is unrepresentable (see `objects::TickOutcome`), and panics inside
//! an entity update propagate to the host loop untouched.

use thiserror::Error;

/// Main error type for world construction and mutation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
    /// Fatal at construction: the grid cannot hash positions without a
    /// positive, finite cell edge length.
    #[error("invalid partition size {0}: must be positive and finite")]
    InvalidPartitionSize(f64),

    /// Insertion outside the caller-declared world extent.
    #[error("position ({x}, {y}) is outside the {width}x{height} world extent")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// A position with a NaN or infinite coordinate reached the engine.
    #[error("position ({x}, {y}) is not finite")]
    NonFinitePosition { x: f64, y: f64 },
}

/// Result type alias for world engine operations.
pub type Result<T> = std::result::Result<T, WorldError>;

impl WorldError {
    /// Creates an out-of-bounds error for a rejected insertion.
    #[must_use]
    pub fn out_of_bounds(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a non-finite position error.
    #[must_use]
    pub fn non_finite(x: f64, y: f64) -> Self {
        Self::NonFinitePosition { x, y }
    }
}
