use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.yaml";

/// User settings, read once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Amount a Counter adds to the shared count per activation
    pub step: i64,
    /// How long the UI loop waits for a key before checking for renders
    pub poll_interval_ms: u64,
    /// Log file, relative to the working directory unless absolute
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            step: 1,
            poll_interval_ms: 50,
            log_file: String::from("lifted-counter.log"),
        }
    }
}

impl Config {
    /// Directory holding the config file (`~/.lifted-counter`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lifted-counter")
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_dir().join(CONFIG_FILE))
    }

    /// Load from an explicit path. A missing file yields defaults,
    /// a malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        // Every press must move the count up
        if config.step < 1 {
            bail!("invalid config {}: step must be at least 1, got {}", path.display(), config.step);
        }
        Ok(config)
    }

    /// Split the log file setting into the directory and file name
    /// `tracing_appender` expects
    pub fn log_target(&self) -> (PathBuf, String) {
        let path = Path::new(&self.log_file);
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("lifted-counter.log")
            .to_string();
        (dir, name)
    }
}
