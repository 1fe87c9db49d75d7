// src/models/overview.rs
use serde::Serialize;

use crate::core::policy::rounded_percentage;
use crate::models::AttendanceState;

/// Attendance summed over every subject.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub subjects: u64,
    pub held: u64,
    pub attended: u64,
}

impl Overview {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            subjects: 0,
            held: 0,
            attended: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn from_states<'a, I>(states: I) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceState>,
    {
        let mut overview = Self::new();
        for state in states {
            overview.add(state);
        }
        overview
    }

    #[inline]
    pub const fn add(&mut self, state: &AttendanceState) {
        self.subjects = self.subjects.saturating_add(1);
        self.held = self.held.saturating_add(state.total_held());
        self.attended = self.attended.saturating_add(state.total_attended());
    }

    #[inline]
    #[must_use]
    pub const fn missed(&self) -> u64 {
        self.held.saturating_sub(self.attended)
    }

    /// Overall percentage to one decimal, `None` until a class has been held.
    #[inline]
    #[must_use]
    pub fn overall_percentage(&self) -> Option<f64> {
        if self.held == 0 {
            return None;
        }
        Some(rounded_percentage(self.attended, self.held, 1))
    }
}
