// src/core/config.rs
use anyhow::{Context as _, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::core::zone::DEFAULT_COMFORT_MARGIN;
use crate::models::attendance_state::percent_to_units;

pub const CONFIG_FILE_NAME: &str = "sib.toml";

/// Minimum attendance assumed for subjects that do not carry their own.
pub const DEFAULT_MINIMUM_PERCENTAGE: f64 = 75.0;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub minimum_percentage: f64,
    pub comfort_margin: f64,
    /// Directory names skipped while scanning for session logs.
    pub exclude: Vec<String>,
    /// File-name glob a session log has to match.
    pub log_glob: String,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            minimum_percentage: DEFAULT_MINIMUM_PERCENTAGE,
            comfort_margin: DEFAULT_COMFORT_MARGIN,
            exclude: vec![String::from(".git")],
            log_glob: String::from("*.yaml"),
        }
    }
}

impl Config {
    /// Parses the contents of a `sib.toml` file.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The content is not valid TOML or contains unknown keys
    /// * `minimum_percentage` is outside `0..=100` or has more than four decimals
    /// * `comfort_margin` is negative
    /// * `log_glob` is not a valid glob
    #[inline]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.minimum_percentage) {
            bail!(
                "minimum_percentage must be within 0..=100, got {}",
                self.minimum_percentage
            );
        }
        if percent_to_units(self.minimum_percentage).is_none() {
            bail!(
                "minimum_percentage must have at most four decimal places, got {}",
                self.minimum_percentage
            );
        }
        if !self.comfort_margin.is_finite() || self.comfort_margin < 0.0 {
            bail!(
                "comfort_margin must not be negative, got {}",
                self.comfort_margin
            );
        }
        glob::Pattern::new(&self.log_glob)
            .with_context(|| format!("Invalid log_glob: {}", self.log_glob))?;
        Ok(())
    }
}

/// Loads `sib.toml` starting from the given directory and recursively checking
/// parent directories until a file is found.
///
/// # Arguments
///
/// * `dir` - The starting directory to search for `sib.toml`
///
/// # Returns
///
/// * `Ok(Config)` - The first configuration found, or the defaults if none exists
///
/// # Errors
///
/// This function may return an error if:
/// * A `sib.toml` file exists but cannot be read
/// * The file contains invalid settings
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while !visited.contains(&current_dir) {
        visited.insert(current_dir.clone());

        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            let content = fs::read_to_string(&config_file).with_context(|| {
                format!("Failed to read config file: {}", config_file.display())
            })?;
            let config = Config::parse(&content)
                .with_context(|| format!("Invalid config file: {}", config_file.display()))?;
            tracing::info!(path = %config_file.display(), "loaded configuration");
            return Ok(config);
        }

        if let Some(parent) = current_dir.parent() {
            current_dir = parent.to_path_buf();
        } else {
            break;
        }
    }

    tracing::debug!(start = %dir.display(), "no {CONFIG_FILE_NAME} found, using defaults");
    Ok(Config::default())
}
