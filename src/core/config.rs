//! Configuration management for feature-planner.
//!
//! Handles loading and saving configuration from TOML files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Template settings
    pub template: TemplateConfig,
}

/// Where generated files go.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// File name used when `generate` is given no output path
    pub default_file: String,

    /// Directory under which `save` creates one folder per task
    pub plans_dir: String,
}

/// Template settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template used when `generate` is given no template path.
    /// The bundled technical plan template is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// Looks for config in:
    /// 1. `.feature-planner.toml` in current directory
    /// 2. `~/.config/feature-planner/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(".feature-planner.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(config_dir) = Self::config_dir() {
            let global_config = config_dir.join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = ?path, "Loaded configuration");
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("feature-planner"))
    }

    /// Directory `save` writes into for a given task.
    pub fn task_dir(&self, task_name: &str) -> PathBuf {
        PathBuf::from(&self.output.plans_dir).join(task_name)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_file: "plan.md".to_string(),
            plans_dir: "implementation-plans".to_string(),
        }
    }
}
