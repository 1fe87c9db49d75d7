// src/error.rs
use thiserror::Error;

/// Rejected input to the attendance policy.
///
/// Inputs are never clamped: a count or threshold outside its domain usually
/// means the record that produced it is already corrupt, and the caller has
/// to fix it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidInput {
    #[error("{field} must not be negative, got {value}")]
    NegativeCount { field: &'static str, value: i64 },

    #[error("attended classes ({attended}) exceed held classes ({held})")]
    AttendedExceedsHeld { attended: u64, held: u64 },

    #[error("minimum percentage must be within 0..=100, got {0}")]
    MinimumOutOfRange(f64),

    #[error("comfort margin must be a non-negative number of percentage points, got {0}")]
    MarginOutOfRange(f64),

    #[error("{field} must have at most four decimal places, got {value}")]
    TooPrecise { field: &'static str, value: f64 },
}
