// src/utils.rs
use anyhow::{Context as _, Result};
use glob::Pattern;

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Compiles the optional `--only` subject filter.
pub fn subject_filter(only: Option<&str>) -> Result<Option<Pattern>> {
    only.map(|pattern| {
        Pattern::new(pattern).with_context(|| format!("Invalid subject pattern: {pattern}"))
    })
    .transpose()
}

pub fn keep_subject(filter: Option<&Pattern>, name: &str) -> bool {
    filter.is_none_or(|pattern| pattern.matches(name))
}
