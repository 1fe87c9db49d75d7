// src/core/scanner/logs.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::env;
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::core::config::Config;
use crate::core::scanner::utils::should_exclude;
use crate::models::SessionLog;

/// Reads every session log in a directory and its subdirectories.
///
/// # Arguments
///
/// * `dir` - The directory path to scan
/// * `config` - Supplies the excluded directory names and the log file glob
///
/// # Returns
///
/// * `Ok(Vec<SessionLog>)` - One log per matching file, sorted by subject name
///
/// # Errors
///
/// This function may return an error if:
/// * The directory cannot be accessed or read
/// * File system operations fail during traversal
/// * A matching file cannot be read as UTF-8 text
/// * A matching file is not a valid session log
#[inline]
pub fn scan_session_logs(dir: &PathBuf, config: &Config) -> Result<Vec<SessionLog>> {
    let absolute_dir = if dir.is_absolute() {
        dir.clone()
    } else {
        env::current_dir()?.join(dir)
    };

    let log_glob = Pattern::new(&config.log_glob)
        .with_context(|| format!("Invalid log_glob: {}", config.log_glob))?;
    let exclude_dirs: Vec<&str> = config.exclude.iter().map(String::as_str).collect();
    let mut logs = Vec::new();

    for entry in WalkDir::new(&absolute_dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !should_exclude(e, &exclude_dirs))
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| log_glob.matches(name));
        if !matches {
            tracing::trace!(path = %entry.path().display(), "not a session log");
            continue;
        }

        let path = entry.path();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session log: {}", path.display()))?;
        let log: SessionLog = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse session log: {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            subject = %log.subject,
            sessions = log.sessions.len(),
            "read session log"
        );
        logs.push(log);
    }

    logs.sort_by(|a, b| a.subject.cmp(&b.subject));
    tracing::info!(dir = %absolute_dir.display(), logs = logs.len(), "scanned session logs");
    Ok(logs)
}
