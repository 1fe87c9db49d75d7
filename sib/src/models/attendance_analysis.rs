// src/models/attendance_analysis.rs
use serde::{Serialize, Serializer};

/// Whether a verdict could be given at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// No class has been held yet, so there is no percentage to judge.
    InsufficientData,
    Safe,
    Unsafe,
}

/// How many further classes can be missed while staying at the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SafeBunks {
    Limited(u64),
    /// A minimum of 0 % can never be violated.
    Unlimited,
}

impl SafeBunks {
    #[inline]
    #[must_use]
    pub const fn count(self) -> Option<u64> {
        match self {
            Self::Limited(n) => Some(n),
            Self::Unlimited => None,
        }
    }
}

impl Serialize for SafeBunks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Limited(n) => serializer.serialize_u64(n),
            Self::Unlimited => serializer.serialize_str("unlimited"),
        }
    }
}

/// How many consecutive classes must be attended to get back to the minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassesToTarget {
    Reachable(u64),
    /// A 100 % minimum with at least one miss on record.
    Unreachable,
}

impl ClassesToTarget {
    #[inline]
    #[must_use]
    pub const fn count(self) -> Option<u64> {
        match self {
            Self::Reachable(n) => Some(n),
            Self::Unreachable => None,
        }
    }
}

impl Serialize for ClassesToTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Reachable(n) => serializer.serialize_u64(n),
            Self::Unreachable => serializer.serialize_str("unreachable"),
        }
    }
}

/// Result of analysing one [`AttendanceState`](crate::models::AttendanceState).
///
/// At most one of `safe_bunks` and `classes_to_target` is non-zero: a safe
/// subject has nothing to recover, an unsafe one has nothing to spare.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceAnalysis {
    /// Attended / held as a percentage, rounded half-up to one decimal.
    pub current_percentage: f64,
    pub is_safe: bool,
    pub standing: Standing,
    pub safe_bunks: SafeBunks,
    pub classes_to_target: ClassesToTarget,
}

impl AttendanceAnalysis {
    #[inline]
    #[must_use]
    pub fn has_insufficient_data(&self) -> bool {
        self.standing == Standing::InsufficientData
    }

    #[inline]
    #[must_use]
    pub fn is_target_unreachable(&self) -> bool {
        self.classes_to_target == ClassesToTarget::Unreachable
    }
}
