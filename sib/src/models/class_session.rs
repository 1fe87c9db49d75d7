// src/models/class_session.rs
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionStatus {
    Present,
    Absent,
}

/// One class that actually took place, as logged by the student.
///
/// Other keys a log may carry, such as `day` or `session_type`, are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClassSession {
    /// `YYYY-MM-DD`, optionally followed by a `T` and a time of day.
    pub date: String,
    #[serde(alias = "startTime")]
    pub start_time: String,
    #[serde(alias = "endTime")]
    pub end_time: String,
    pub status: SessionStatus,
}

impl ClassSession {
    /// The calendar day part of `date`.
    #[inline]
    #[must_use]
    pub fn day_key(&self) -> &str {
        self.date
            .split_once('T')
            .map_or(self.date.as_str(), |(day, _)| day)
    }

    #[inline]
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.status == SessionStatus::Present
    }
}
