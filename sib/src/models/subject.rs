// src/models/subject.rs
use serde::Deserialize;

use crate::error::InvalidInput;
use crate::models::AttendanceState;

/// A subject record with pre-aggregated counters.
///
/// Field aliases accept records exported with camelCase keys.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Subject {
    pub name: String,
    #[serde(alias = "totalClasses")]
    pub total_classes: i64,
    #[serde(alias = "attendedClasses")]
    pub attended_classes: i64,
    #[serde(default, alias = "minPercentage")]
    pub min_percentage: Option<f64>,
}

impl Subject {
    /// Validated counts, falling back to `default_minimum` when the record
    /// carries no minimum of its own.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if the stored counters or minimum are invalid.
    #[inline]
    pub fn state(&self, default_minimum: f64) -> Result<AttendanceState, InvalidInput> {
        AttendanceState::new(
            self.total_classes,
            self.attended_classes,
            self.min_percentage.unwrap_or(default_minimum),
        )
    }
}
