// src/core/scanner/subjects.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::models::Subject;

/// Reads a YAML sequence of subject records.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read as UTF-8 text
/// * The content is not a list of subject records
#[inline]
pub fn load_subjects(path: &Path) -> Result<Vec<Subject>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read subjects file: {}", path.display()))?;
    if content.trim().is_empty() {
        tracing::warn!(path = %path.display(), "subjects file is empty");
        return Ok(Vec::new());
    }
    let subjects: Vec<Subject> = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse subjects file: {}", path.display()))?;
    tracing::info!(path = %path.display(), subjects = subjects.len(), "loaded subjects");
    Ok(subjects)
}
