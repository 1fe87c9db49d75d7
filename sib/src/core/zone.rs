// src/core/zone.rs
use serde::Serialize;

use crate::core::policy::meets_threshold;
use crate::error::InvalidInput;
use crate::models::attendance_state::percent_to_units;
use crate::models::{AttendanceState, FULL_ATTENDANCE};

/// Default distance above the minimum, in percentage points, below which a
/// safe subject is only a warning.
pub const DEFAULT_COMFORT_MARGIN: f64 = 10.0;

/// Dashboard-style risk bucket for a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskZone {
    NoData,
    /// At or above `minimum + margin`.
    Safe,
    /// At or above the minimum but inside the margin.
    Warning,
    Danger,
}

impl RiskZone {
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoData => "No Data",
            Self::Safe => "Safe",
            Self::Warning => "Warning",
            Self::Danger => "Danger",
        }
    }
}

/// Buckets a subject by how far its attendance sits above the minimum.
///
/// `minimum + comfort_margin` is capped at 100 %, so perfect attendance is
/// always [`RiskZone::Safe`].
///
/// # Errors
///
/// Returns [`InvalidInput::MarginOutOfRange`] if the margin is negative or not
/// finite, and [`InvalidInput::TooPrecise`] if it has more than four decimal
/// places.
#[inline]
pub fn classify(state: &AttendanceState, comfort_margin: f64) -> Result<RiskZone, InvalidInput> {
    let margin = margin_to_units(comfort_margin)?;
    let held = state.total_held();
    if held == 0 {
        return Ok(RiskZone::NoData);
    }

    let attended = state.total_attended();
    let comfortable = state.threshold().saturating_add(margin).min(FULL_ATTENDANCE);

    let zone = if meets_threshold(attended, held, comfortable) {
        RiskZone::Safe
    } else if meets_threshold(attended, held, state.threshold()) {
        RiskZone::Warning
    } else {
        RiskZone::Danger
    };
    Ok(zone)
}

// Anything past 100 points behaves like 100: nothing sits above full attendance.
fn margin_to_units(comfort_margin: f64) -> Result<u64, InvalidInput> {
    if !comfort_margin.is_finite() || comfort_margin < 0.0 {
        return Err(InvalidInput::MarginOutOfRange(comfort_margin));
    }
    percent_to_units(comfort_margin.min(100.0)).ok_or(InvalidInput::TooPrecise {
        field: "comfort margin",
        value: comfort_margin,
    })
}
