// src/models/session_log.rs
use serde::Deserialize;

use crate::models::ClassSession;

/// Every logged session of a single subject, one file per subject.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SessionLog {
    pub subject: String,
    #[serde(default, alias = "minPercentage")]
    pub min_percentage: Option<f64>,
    #[serde(default)]
    pub sessions: Vec<ClassSession>,
}
