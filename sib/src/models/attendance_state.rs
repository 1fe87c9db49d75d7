// src/models/attendance_state.rs
use crate::error::InvalidInput;

/// Fixed-point units per percentage point (a threshold unit is 0.0001 %).
pub const PERCENT_SCALE: u64 = 10_000;

/// 100 % expressed in threshold units.
pub const FULL_ATTENDANCE: u64 = 100 * PERCENT_SCALE;

/// Validated attendance counts for one subject.
///
/// The only way to build one is through [`AttendanceState::new`] or
/// [`AttendanceState::from_counts`], so `total_attended <= total_held` and
/// `0 <= minimum_percent <= 100` always hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttendanceState {
    total_held: u64,
    total_attended: u64,
    minimum_percent: f64,
    threshold: u64,
}

impl AttendanceState {
    /// Validates raw counts as they come out of a record store or a form.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if a count is negative, attended exceeds held,
    /// the minimum is not a finite number within `0..=100`, or the minimum has
    /// more than four decimal places.
    #[inline]
    pub fn new(
        total_held: i64,
        total_attended: i64,
        minimum_percent: f64,
    ) -> Result<Self, InvalidInput> {
        let held = u64::try_from(total_held).map_err(|_| InvalidInput::NegativeCount {
            field: "total_held",
            value: total_held,
        })?;
        let attended = u64::try_from(total_attended).map_err(|_| InvalidInput::NegativeCount {
            field: "total_attended",
            value: total_attended,
        })?;
        Self::from_counts(held, attended, minimum_percent)
    }

    /// Same as [`AttendanceState::new`] for counts that are already unsigned.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if attended exceeds held or the minimum is out
    /// of range.
    #[inline]
    pub fn from_counts(
        total_held: u64,
        total_attended: u64,
        minimum_percent: f64,
    ) -> Result<Self, InvalidInput> {
        if total_attended > total_held {
            return Err(InvalidInput::AttendedExceedsHeld {
                attended: total_attended,
                held: total_held,
            });
        }
        if !is_percentage(minimum_percent) {
            return Err(InvalidInput::MinimumOutOfRange(minimum_percent));
        }
        let threshold =
            percent_to_units(minimum_percent).ok_or(InvalidInput::TooPrecise {
                field: "minimum percentage",
                value: minimum_percent,
            })?;

        Ok(Self {
            total_held,
            total_attended,
            minimum_percent,
            threshold,
        })
    }

    #[inline]
    #[must_use]
    pub const fn total_held(&self) -> u64 {
        self.total_held
    }

    #[inline]
    #[must_use]
    pub const fn total_attended(&self) -> u64 {
        self.total_attended
    }

    #[inline]
    #[must_use]
    pub const fn minimum_percent(&self) -> f64 {
        self.minimum_percent
    }

    #[inline]
    #[must_use]
    pub const fn missed(&self) -> u64 {
        self.total_held.saturating_sub(self.total_attended)
    }

    /// Minimum percentage in threshold units (see [`PERCENT_SCALE`]).
    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> u64 {
        self.threshold
    }

    /// The same subject after `extra` more classes are held and all of them
    /// are missed.
    #[inline]
    #[must_use]
    pub const fn with_extra_misses(self, extra: u64) -> Self {
        Self {
            total_held: self.total_held.saturating_add(extra),
            ..self
        }
    }
}

/// A finite number within `0..=100`.
pub(crate) fn is_percentage(percent: f64) -> bool {
    percent.is_finite() && (0.0..=100.0).contains(&percent)
}

/// Converts a percentage to threshold units.
///
/// Returns `None` unless the value lies within `0..=100` and is a whole number
/// of units: `66.67` converts, `66.666666` does not. Converting back has to
/// give the same `f64`, so no threshold is ever silently moved.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "value is checked to lie within 0..=1_000_000 before the cast"
)]
pub(crate) fn percent_to_units(percent: f64) -> Option<u64> {
    if !is_percentage(percent) {
        return None;
    }
    let units = (percent * PERCENT_SCALE as f64).round() as u64;
    let exact = units as f64 / PERCENT_SCALE as f64 == percent;
    exact.then_some(units)
}
