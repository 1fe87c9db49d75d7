//! Should I bunk? Attendance standing and class-skipping projections.
//!
//! The policy in [`core::policy`] is pure: give it held and attended counts
//! plus a minimum percentage and it tells you where you stand, how many
//! classes you can still miss, and how many you must attend to recover.
//! Everything else in the crate reads records from disk and prints them.

pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
mod utils;

pub use cli::{Args, render, run};
pub use crate::core::config::{Config, load_config};
pub use crate::core::decision::BunkDecision;
pub use crate::core::policy::{analyze, simulate_misses, simulate_one_miss};
pub use crate::core::scanner::{load_subjects, scan_session_logs};
pub use crate::core::sessions::{Tally, tally};
pub use crate::core::zone::{RiskZone, classify};
pub use error::InvalidInput;
pub use logging::init_tracing;
pub use models::{
    AttendanceAnalysis, AttendanceState, ClassSession, ClassesToTarget, Overview, SafeBunks,
    SessionLog, SessionStatus, Standing, Subject,
};
