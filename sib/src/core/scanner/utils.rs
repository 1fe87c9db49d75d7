// src/core/scanner/utils.rs
use crate::utils::is_hidden;

/// Determines if a directory entry should be excluded from scanning:
/// - Whether it's a hidden file/directory
/// - Whether it matches any of the explicitly excluded directories
///
/// # Arguments
/// * `entry` - The directory entry to check
/// * `exclude_dirs` - List of directory names to exclude
///
/// # Returns
/// `true` if the entry should be excluded, `false` otherwise
pub fn should_exclude(entry: &walkdir::DirEntry, exclude_dirs: &[&str]) -> bool {
    if is_hidden(entry) {
        return true;
    }

    if let Some(path_str) = entry.path().to_str() {
        for dir in exclude_dirs {
            if entry.file_type().is_dir() && entry.file_name().to_str() == Some(*dir) {
                return true;
            }
            if path_str.contains(&format!("/{dir}/")) {
                return true;
            }
        }
    }

    false
}
