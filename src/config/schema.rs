//! Configuration schema for userctl
//!
//! Configuration is stored at `~/.config/userctl/config.toml`

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// API endpoint settings
    pub api: ApiConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Ask before deleting users
    pub confirm_delete: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            confirm_delete: true,
        }
    }
}

/// User API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the user API
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert!(config.general.confirm_delete);
        assert!(!config.general.verbose);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("[api]\nbase_url = \"https://api.test\"").unwrap();
        assert_eq!(config.api.base_url, "https://api.test");
        assert!(config.general.confirm_delete);
    }

    #[test]
    fn roundtrip() {
        let mut config = Config::default();
        config.general.verbose = true;
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert!(parsed.general.verbose);
        assert_eq!(parsed.api.base_url, config.api.base_url);
    }
}
