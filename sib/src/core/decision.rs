// src/core/decision.rs
use serde::ser::{Serialize, SerializeStruct as _, Serializer};

use crate::core::policy::{rounded_percentage, simulate_one_miss};
use crate::models::{AttendanceAnalysis, AttendanceState};

/// Yes/no answer to "can I skip the next class?".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BunkDecision {
    pub can_bunk: bool,
    /// Percentage after missing the next class, to two decimals.
    pub percentage_after: f64,
    pub after: AttendanceAnalysis,
}

impl BunkDecision {
    #[inline]
    #[must_use]
    pub fn for_next_class(state: &AttendanceState) -> Self {
        let after = simulate_one_miss(state);
        let held_after = state.total_held().saturating_add(1);
        let decision = Self {
            can_bunk: after.is_safe,
            percentage_after: rounded_percentage(state.total_attended(), held_after, 2),
            after,
        };
        tracing::debug!(
            can_bunk = decision.can_bunk,
            percentage_after = decision.percentage_after,
            "decided on next class"
        );
        decision
    }

    #[inline]
    #[must_use]
    pub const fn decision(&self) -> &'static str {
        if self.can_bunk {
            "YES, YOU CAN BUNK"
        } else {
            "NO, DO NOT BUNK"
        }
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> &'static str {
        if self.can_bunk { "SAFE" } else { "DANGER" }
    }
}

impl Serialize for BunkDecision {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("BunkDecision", 5)?;
        state.serialize_field("canBunk", &self.can_bunk)?;
        state.serialize_field("decision", self.decision())?;
        state.serialize_field("status", self.status())?;
        state.serialize_field("percentageAfter", &self.percentage_after)?;
        state.serialize_field("after", &self.after)?;
        state.end()
    }
}
