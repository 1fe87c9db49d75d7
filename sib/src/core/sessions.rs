// src/core/sessions.rs
use anyhow::{Result, bail};
use std::collections::HashSet;

use crate::error::InvalidInput;
use crate::models::{AttendanceState, ClassSession};

/// Held and attended counts recomputed from a session log.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub held: u64,
    pub attended: u64,
}

impl Tally {
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if `minimum_percent` is out of range.
    #[inline]
    pub fn into_state(self, minimum_percent: f64) -> Result<AttendanceState, InvalidInput> {
        AttendanceState::from_counts(self.held, self.attended, minimum_percent)
    }
}

/// Counts every logged session as held and every `PRESENT` one as attended.
///
/// # Errors
///
/// Fails if two sessions share a calendar day, start time and end time: the
/// same class cannot be logged twice.
#[inline]
pub fn tally(sessions: &[ClassSession]) -> Result<Tally> {
    let mut seen = HashSet::new();
    let mut tally = Tally::default();

    for session in sessions {
        let slot = (
            session.day_key(),
            session.start_time.as_str(),
            session.end_time.as_str(),
        );
        if !seen.insert(slot) {
            bail!(
                "Session on {} from {} to {} is logged more than once",
                slot.0,
                slot.1,
                slot.2
            );
        }

        tally.held = tally.held.saturating_add(1);
        if session.is_present() {
            tally.attended = tally.attended.saturating_add(1);
        }
    }

    Ok(tally)
}
