// src/models.rs
pub mod attendance_analysis;
pub mod attendance_state;
pub mod class_session;
pub mod overview;
pub mod session_log;
pub mod subject;

pub use attendance_analysis::{AttendanceAnalysis, ClassesToTarget, SafeBunks, Standing};
pub use attendance_state::{AttendanceState, FULL_ATTENDANCE, PERCENT_SCALE};
pub use class_session::{ClassSession, SessionStatus};
pub use overview::Overview;
pub use session_log::SessionLog;
pub use subject::Subject;
