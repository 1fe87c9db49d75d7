// src/core/scanner.rs
pub mod logs;
pub mod subjects;
pub mod utils;

#[cfg(test)]
pub mod test_utils;

pub use logs::scan_session_logs;
pub use subjects::load_subjects;
