use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(
        &dir,
        "os.yaml",
        "subject: Operating Systems\nsessions:\n  - date: 2024-08-01\n    start_time: '10:00'\n    end_time: '11:00'\n    status: PRESENT\n",
    )?;
    create_test_file(
        &dir,
        "nested/ds.yaml",
        "subject: Data Structures\nmin_percentage: 80\nsessions: []\n",
    )?;
    create_test_file(&dir, "notes.md", "Not a session log")?;
    create_test_file(&dir, ".hidden.yaml", "subject: Hidden\n")?;

    Ok(dir)
}
