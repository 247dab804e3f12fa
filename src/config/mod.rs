//! Configuration management for userctl

pub mod schema;

pub use schema::Config;

use crate::error::{UserctlError, UserctlResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Name of the project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = ".userctl.toml";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("userctl")
            .join("config.toml")
    }

    /// Find a project-local `.userctl.toml`, walking up from `start`
    pub fn find_local_config(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(LOCAL_CONFIG_FILE))
            .find(|candidate| candidate.exists())
    }

    /// Load configuration, using defaults if the file does not exist
    pub async fn load(&self) -> UserctlResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> UserctlResult<Config> {
        if !path.exists() {
            return Err(UserctlError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| UserctlError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| UserctlError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load configuration with an optional project-local overlay; keys set
    /// in the local file win over the global ones
    pub async fn load_merged(&self, local: Option<&Path>) -> UserctlResult<Config> {
        let base = self.load().await?;
        let Some(local_path) = local else {
            return Ok(base);
        };

        let content = fs::read_to_string(local_path).await.map_err(|e| {
            UserctlError::io(format!("reading config from {}", local_path.display()), e)
        })?;
        let overlay: toml::Value =
            content
                .parse()
                .map_err(|e: toml::de::Error| UserctlError::ConfigInvalid {
                    path: local_path.to_path_buf(),
                    reason: e.to_string(),
                })?;

        let mut merged = toml::Value::try_from(base)?;
        merge_values(&mut merged, overlay);
        merged
            .try_into()
            .map_err(|e: toml::de::Error| UserctlError::ConfigInvalid {
                path: local_path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> UserctlResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            UserctlError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> UserctlResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| UserctlError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Overlay `overlay` onto `base`, recursing into tables
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match overlay {
        toml::Value::Table(overlay_table) => {
            if let toml::Value::Table(base_table) = base {
                for (key, value) in overlay_table {
                    match base_table.entry(key) {
                        toml::map::Entry::Occupied(mut entry) => {
                            merge_values(entry.get_mut(), value);
                        }
                        toml::map::Entry::Vacant(entry) => {
                            entry.insert(value);
                        }
                    }
                }
            } else {
                *base = toml::Value::Table(overlay_table);
            }
        }
        other => *base = other,
    }
}
