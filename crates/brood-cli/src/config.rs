//! Configuration file support.
//!
//! The file is TOML. Every key is optional:
//!
//! ```toml
//! known_sets = ["E", "A", "B"]
//! utc_offset_minutes = 540
//!
//! [policy]
//! generation_limit = 3
//! default_population_limit = 50
//!
//! [policy.population_limits]
//! E = 100
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use brood_core::LAB_UTC_OFFSET_MINUTES;
use brood_model::{DecisionPolicy, SetLabel, default_known_sets};

/// File read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "brood.toml";

/// Settings for a `brood` run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sets the lab keeps; other letters are flagged with a warning.
    pub known_sets: Vec<SetLabel>,
    /// Offset of lab-local time from UTC, used to date new broods.
    pub utc_offset_minutes: i32,
    /// Discard rule thresholds.
    pub policy: DecisionPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            known_sets: default_known_sets(),
            utc_offset_minutes: LAB_UTC_OFFSET_MINUTES,
            policy: DecisionPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse configuration")
    }
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, `brood.toml` in the working
/// directory is used if present, otherwise the defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let path: PathBuf = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !default.is_file() {
                debug!("no configuration file, using defaults");
                return Ok(AppConfig::default());
            }
            default
        }
    };
    let text = fs::read_to_string(&path)
        .with_context(|| format!("read configuration {}", path.display()))?;
    let config = AppConfig::from_toml(&text)
        .with_context(|| format!("load configuration {}", path.display()))?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}
